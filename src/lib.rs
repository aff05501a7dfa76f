// src/lib.rs
//! Desk Scene
//!
//! A static 3D desk scene assembled from textured, lit primitive meshes and
//! rendered with wgpu and winit.

pub mod app;
pub mod config;
pub mod errors;
pub mod gfx;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::DeskSceneApp;
pub use config::SceneConfig;
pub use errors::{Result, SceneError};

/// Opens the window and renders the desk scene until it is closed
pub fn run(config: SceneConfig) -> anyhow::Result<()> {
    DeskSceneApp::new(config)?.run()
}
