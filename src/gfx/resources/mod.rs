// src/gfx/resources/mod.rs
//! Scene resources
//!
//! Named shader uniforms, materials, lights, the texture registry and the GPU
//! textures and buffers backing them.

pub mod global_bindings;
pub mod lighting;
pub mod material;
pub mod texture_registry;
pub mod texture_resource;
pub mod uniforms;

// Re-export main types
pub use global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO};
pub use lighting::LightSource;
pub use material::{MaterialLibrary, MaterialRecord};
pub use texture_registry::{
    DecodedImage, ImageDecoder, ImageFileDecoder, TextureHandle, TextureRegistry, TextureUploader,
};
pub use texture_resource::TextureResource;
pub use uniforms::{ShaderUniforms, UniformStore};
