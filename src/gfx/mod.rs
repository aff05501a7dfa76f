//! # Graphics Module
//!
//! Everything needed to draw the desk scene: the scene description itself,
//! the resources it is drawn with, and the wgpu backend that puts it on screen.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera framing the desk
//! - **Geometry** ([`geometry`]) - Procedural primitive meshes
//! - **Scene** ([`scene`]) - Draw-call builder, scene manager and the desk layout
//! - **Resources** ([`resources`]) - Named uniforms, materials, lights, textures
//! - **Rendering** ([`rendering`]) - wgpu pipeline, GPU meshes and textures
//!
//! The scene code only talks to its collaborators through traits
//! ([`ShaderUniforms`](resources::uniforms::ShaderUniforms),
//! [`ShapeMeshes`](scene::ShapeMeshes),
//! [`TextureUploader`](resources::texture_registry::TextureUploader)), so it
//! runs unchanged against the wgpu backend and against in-memory doubles.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run(window: std::sync::Arc<winit::window::Window>) -> anyhow::Result<()> {
//! use desk_scene::{config::SceneConfig, gfx::RenderEngine};
//!
//! let config = SceneConfig::default();
//! let engine = RenderEngine::new(window, &config).await?;
//! let mut scene = engine.create_scene();
//! scene.prepare_scene(&config.texture_dir);
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
