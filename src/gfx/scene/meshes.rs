//! Primitive meshes the scene is assembled from

use std::fmt;

use crate::gfx::geometry::{self, GeometryData};

const ROUND_SEGMENTS: u32 = 48;
const SPHERE_RINGS: u32 = 24;
const TUBE_SEGMENTS: u32 = 16;

/// The closed set of primitive shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MeshKind {
    #[default]
    Box,
    Cylinder,
    Cone,
    Sphere,
    HalfSphere,
    Torus,
    HalfTorus,
    Plane,
    TaperedCylinder,
}

impl MeshKind {
    pub const ALL: [MeshKind; 9] = [
        MeshKind::Box,
        MeshKind::Cylinder,
        MeshKind::Cone,
        MeshKind::Sphere,
        MeshKind::HalfSphere,
        MeshKind::Torus,
        MeshKind::HalfTorus,
        MeshKind::Plane,
        MeshKind::TaperedCylinder,
    ];

    /// Geometry generator for this shape
    pub fn generator(self) -> fn() -> GeometryData {
        match self {
            MeshKind::Box => geometry::generate_box,
            MeshKind::Cylinder => || geometry::generate_cylinder(ROUND_SEGMENTS),
            MeshKind::Cone => || geometry::generate_cone(ROUND_SEGMENTS),
            MeshKind::Sphere => || geometry::generate_sphere(ROUND_SEGMENTS, SPHERE_RINGS),
            MeshKind::HalfSphere => {
                || geometry::generate_half_sphere(ROUND_SEGMENTS, SPHERE_RINGS / 2)
            }
            MeshKind::Torus => || geometry::generate_torus(ROUND_SEGMENTS, TUBE_SEGMENTS),
            MeshKind::HalfTorus => {
                || geometry::generate_half_torus(ROUND_SEGMENTS / 2, TUBE_SEGMENTS)
            }
            MeshKind::Plane => || geometry::generate_plane(1, 1),
            MeshKind::TaperedCylinder => || geometry::generate_tapered_cylinder(ROUND_SEGMENTS),
        }
    }

    pub fn generate(self) -> GeometryData {
        (self.generator())()
    }

    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Box => "box",
            MeshKind::Cylinder => "cylinder",
            MeshKind::Cone => "cone",
            MeshKind::Sphere => "sphere",
            MeshKind::HalfSphere => "half sphere",
            MeshKind::Torus => "torus",
            MeshKind::HalfTorus => "half torus",
            MeshKind::Plane => "plane",
            MeshKind::TaperedCylinder => "tapered cylinder",
        }
    }
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mesh collaborator: owns the primitive meshes and issues draws.
///
/// `S` is the uniform state the draw is made with.
pub trait ShapeMeshes<S: ?Sized> {
    /// Prepares `kind` for drawing; loading twice is harmless
    fn load_mesh(&mut self, kind: MeshKind);

    /// Draws `kind` with the current uniform state
    fn draw_mesh(&mut self, kind: MeshKind, uniforms: &S);
}
