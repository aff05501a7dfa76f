//! # Desk Scene Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use desk_scene::prelude::*;
//! ```

pub use crate::{
    config::SceneConfig,
    errors::{Result, SceneError},
    gfx::{
        camera::{CameraManager, OrbitCamera},
        rendering::{GpuScene, RenderEngine},
        resources::{
            material::MaterialRecord,
            texture_registry::{ImageDecoder, TextureUploader},
            uniforms::{ShaderUniforms, UniformStore},
        },
        scene::{MeshKind, ObjectBuilder, RenderBridge, SceneManager, ShapeMeshes},
    },
};

pub use cgmath::{Vector2, Vector3, Vector4};
