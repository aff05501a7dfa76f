//! # Procedural Geometry Generation
//!
//! Generates the primitive shapes the desk scene is assembled from, so no model
//! files are needed. All shapes are Y-up and sized so that a scale of one gives
//! a unit-sized object:
//!
//! - **Box**: unit cube centered at the origin
//! - **Plane**: 2x2 quad in the XZ plane, facing +Y
//! - **Cylinder / Cone / Tapered cylinder**: radius 1, base at y = 0, top at y = 1
//! - **Sphere**: radius 1 centered at the origin, **half sphere** is its upper dome
//! - **Torus**: ring of radius 1 in the XY plane, **half torus** is its upper arc
//!
//! ## Usage
//!
//! ```rust
//! use desk_scene::gfx::geometry::{generate_box, generate_cylinder};
//!
//! let cube = generate_box();
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let cup = generate_cylinder(32);
//! assert!(cup.vertex_count() > 0);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), v pointing up
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends one vertex and returns its index
    pub(crate) fn push_vertex(
        &mut self,
        position: [f32; 3],
        normal: [f32; 3],
        uv: [f32; 2],
    ) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(uv);
        index
    }

    /// Converts into interleaved vertices plus indices for the GPU
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices: Vec<Vertex3D> = (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                tex_coords: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
