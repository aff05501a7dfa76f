// src/gfx/rendering/mod.rs
//! wgpu backend for the desk scene
//!
//! Handles the render pipeline, the GPU copies of the primitive meshes and
//! textures, and frame rendering.

pub mod gpu_meshes;
pub mod gpu_textures;
pub mod pipeline_manager;
pub mod render_engine;

// Re-export main types
pub use gpu_meshes::{GpuMeshLibrary, ObjectUniform, RecordedDraw};
pub use gpu_textures::GpuTextures;
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::{GpuScene, RenderEngine};
