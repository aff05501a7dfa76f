//! Material system for Phong shading
//!
//! Materials are plain records looked up by tag. The library is an ordered
//! list scanned front to back, so when a tag is defined twice the earliest
//! definition wins.

use cgmath::Vector3;

/// Phong material parameters associated with a tag
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub tag: String,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl MaterialRecord {
    pub fn new(
        tag: impl Into<String>,
        ambient_color: Vector3<f32>,
        ambient_strength: f32,
        diffuse_color: Vector3<f32>,
        specular_color: Vector3<f32>,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            ambient_color,
            ambient_strength,
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Material whose colors are all grey levels
    fn grey(
        tag: &str,
        ambient: f32,
        strength: f32,
        diffuse: f32,
        specular: f32,
        shininess: f32,
    ) -> Self {
        Self::new(
            tag,
            Vector3::new(ambient, ambient, ambient),
            strength,
            Vector3::new(diffuse, diffuse, diffuse),
            Vector3::new(specular, specular, specular),
            shininess,
        )
    }
}

/// Ordered collection of materials
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: Vec<MaterialRecord>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a material. Duplicate tags are kept but shadowed by the earlier entry.
    pub fn add(&mut self, material: MaterialRecord) {
        self.materials.push(material);
    }

    /// First material registered under `tag`
    pub fn find(&self, tag: &str) -> Option<&MaterialRecord> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// The materials used by the desk scene, in definition order
pub fn desk_materials() -> Vec<MaterialRecord> {
    vec![
        MaterialRecord::grey("metal", 0.2, 0.3, 0.2, 0.5, 22.0),
        MaterialRecord::grey("wood", 0.1, 0.2, 0.23, 0.1, 0.3),
        MaterialRecord::grey("glass", 0.4, 0.3, 0.3, 0.6, 85.0),
        MaterialRecord::grey("soft", 0.2, 0.4, 0.1, 0.1, 0.05),
        MaterialRecord::grey("wall", 0.2, 0.3, 0.5, 0.3, 0.5),
        MaterialRecord::grey("matte", 0.2, 0.2, 0.1, 0.0, 0.0),
        MaterialRecord::new(
            "screen",
            Vector3::new(0.298, 0.694, 0.929),
            0.2,
            Vector3::new(0.3, 0.3, 0.3),
            Vector3::new(0.6, 0.6, 0.6),
            10.0,
        ),
        MaterialRecord::new(
            "hedge",
            Vector3::new(0.1, 0.1, 0.1),
            0.1,
            Vector3::new(0.3, 0.2, 0.3),
            Vector3::new(0.4, 0.2, 0.2),
            0.5,
        ),
    ]
}
