//! # Scene Module
//!
//! Builds the desk scene out of primitive meshes. A [`SceneManager`] owns the
//! textures and materials and turns draw requests into shader uniforms; an
//! [`ObjectBuilder`] describes one object after another and submits each
//! through the manager.
//!
//! ## Key Components
//!
//! - [`SceneManager`] - texture registry, material library and [`RenderBridge`]
//! - [`ObjectBuilder`] - per-draw state that carries over between objects
//! - [`MeshKind`] / [`ShapeMeshes`] - the primitive shapes and who draws them
//! - [`Vertex3D`] - vertex layout with position, normal and texture coordinates

pub mod layout;
pub mod meshes;
pub mod object;
pub mod scene_manager;
pub mod vertex;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types
pub use meshes::{MeshKind, ShapeMeshes};
pub use object::{DrawState, ObjectBuilder};
pub use scene_manager::{RenderBridge, SceneManager};
pub use vertex::Vertex3D;
