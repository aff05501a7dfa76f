//! # Draw-call builder
//!
//! [`ObjectBuilder`] accumulates the state of the next draw (transform, color,
//! texture, UV scale, material and mesh) and submits it through a
//! [`RenderBridge`] when [`ObjectBuilder::render`] is called. Nothing is reset
//! between draws: any field not set since the last [`ObjectBuilder::reset_all`]
//! keeps the value it had for the previous object.
//!
//! ```no_run
//! # use desk_scene::gfx::scene::{MeshKind, ObjectBuilder, RenderBridge};
//! # fn draw<B: RenderBridge>(bridge: &mut B) {
//! use cgmath::{Vector3, Vector4};
//!
//! let mut object = ObjectBuilder::new(bridge);
//! object
//!     .set_mesh(MeshKind::Cylinder)
//!     .set_scale(Vector3::new(1.0, 2.0, 1.0))
//!     .set_color(Vector4::new(0.8, 0.2, 0.2, 1.0))
//!     .render();
//!
//! // Same cylinder, one unit to the right
//! object.set_position(Vector3::new(1.0, 0.0, 0.0)).render();
//! # }
//! ```

use cgmath::{Vector2, Vector3, Vector4};

use super::{meshes::MeshKind, scene_manager::RenderBridge};

/// Everything one draw call is made from
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub position: Vector3<f32>,
    /// Euler angles in degrees, applied X then Y then Z
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub color: Vector4<f32>,
    pub texture: Option<String>,
    pub uv_scale: Vector2<f32>,
    pub material: Option<String>,
    pub mesh: MeshKind,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            color: Vector4::new(0.0, 0.0, 0.0, 1.0),
            texture: None,
            uv_scale: Vector2::new(0.0, 0.0),
            material: None,
            mesh: MeshKind::Box,
        }
    }
}

/// Empty tags mean "none"
fn optional_tag(tag: &str) -> Option<String> {
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

/// Builder for draw calls, borrowing the bridge it submits through
pub struct ObjectBuilder<'a, B: RenderBridge + ?Sized> {
    bridge: &'a mut B,
    state: DrawState,
}

impl<'a, B: RenderBridge + ?Sized> ObjectBuilder<'a, B> {
    pub fn new(bridge: &'a mut B) -> Self {
        Self {
            bridge,
            state: DrawState::default(),
        }
    }

    pub fn set_position(&mut self, position: Vector3<f32>) -> &mut Self {
        self.state.position = position;
        self
    }

    pub fn set_rotation(&mut self, rotation: Vector3<f32>) -> &mut Self {
        self.state.rotation = rotation;
        self
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) -> &mut Self {
        self.state.scale = scale;
        self
    }

    pub fn set_color(&mut self, color: Vector4<f32>) -> &mut Self {
        self.state.color = color;
        self
    }

    /// Selects a texture by tag; `""` draws untextured
    pub fn set_texture(&mut self, tag: &str) -> &mut Self {
        self.state.texture = optional_tag(tag);
        self
    }

    pub fn set_uv_scale(&mut self, uv_scale: Vector2<f32>) -> &mut Self {
        self.state.uv_scale = uv_scale;
        self
    }

    /// Selects a material by tag; `""` leaves the material uniforms alone
    pub fn set_material(&mut self, tag: &str) -> &mut Self {
        self.state.material = optional_tag(tag);
        self
    }

    pub fn set_mesh(&mut self, mesh: MeshKind) -> &mut Self {
        self.state.mesh = mesh;
        self
    }

    /// Submits the current state and issues exactly one mesh draw.
    ///
    /// Unknown texture or material tags never fail the draw: an unknown
    /// texture binds no unit, an unknown material leaves the previous
    /// material in effect.
    pub fn render(&mut self) -> &mut Self {
        let state = &self.state;

        self.bridge
            .submit_transform(state.scale, state.rotation, state.position);
        self.bridge.submit_color(state.color);

        if let Some(tag) = &state.texture {
            let slot = self.bridge.find_texture_slot(tag);
            self.bridge.submit_texture_slot(slot);
            self.bridge.submit_uv_scale(state.uv_scale);
        }

        if let Some(tag) = &state.material {
            if let Some(material) = self.bridge.find_material(tag).cloned() {
                self.bridge.submit_material(&material);
            }
        }

        self.bridge.draw_mesh(state.mesh);
        self
    }

    /// Restores every field to its default, except the mesh
    pub fn reset_all(&mut self) -> &mut Self {
        let mesh = self.state.mesh;
        self.state = DrawState {
            mesh,
            ..DrawState::default()
        };
        self
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::test_support::{BridgeCall, RecordingBridge};
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let mut bridge = RecordingBridge::default();
        let object = ObjectBuilder::new(&mut bridge);
        assert_eq!(object.state(), &DrawState::default());
        assert_eq!(object.state().scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(object.state().color, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_untextured_draw_sequence() {
        let mut bridge = RecordingBridge::default();
        ObjectBuilder::new(&mut bridge)
            .set_mesh(MeshKind::Sphere)
            .set_color(Vector4::new(0.5, 0.5, 0.5, 1.0))
            .render();

        assert_eq!(
            bridge.calls,
            vec![
                BridgeCall::Transform {
                    scale: Vector3::new(1.0, 1.0, 1.0),
                    rotation: Vector3::new(0.0, 0.0, 0.0),
                    position: Vector3::new(0.0, 0.0, 0.0),
                },
                BridgeCall::Color(Vector4::new(0.5, 0.5, 0.5, 1.0)),
                BridgeCall::Draw(MeshKind::Sphere),
            ]
        );
    }

    #[test]
    fn test_textured_draw_resolves_slot() {
        let mut bridge = RecordingBridge::with_textures(&["cement", "wood"]);
        ObjectBuilder::new(&mut bridge)
            .set_texture("wood")
            .set_uv_scale(Vector2::new(2.0, 3.0))
            .render();

        assert!(bridge.calls.contains(&BridgeCall::TextureSlot(Some(1))));
        assert!(bridge
            .calls
            .contains(&BridgeCall::UvScale(Vector2::new(2.0, 3.0))));
        assert_eq!(bridge.draw_count(), 1);
    }

    #[test]
    fn test_unknown_tags_still_draw() {
        let mut bridge = RecordingBridge::default();
        ObjectBuilder::new(&mut bridge)
            .set_texture("missing")
            .set_material("unobtainium")
            .render();

        assert!(bridge.calls.contains(&BridgeCall::TextureSlot(None)));
        assert!(!bridge
            .calls
            .iter()
            .any(|c| matches!(c, BridgeCall::Material(_))));
        assert_eq!(bridge.draw_count(), 1);
    }

    #[test]
    fn test_empty_tags_skip_texture_and_material() {
        let mut bridge = RecordingBridge::with_textures(&["wood"]);
        bridge.add_material("wood");
        let mut object = ObjectBuilder::new(&mut bridge);
        object
            .set_texture("wood")
            .set_material("wood")
            .set_texture("")
            .set_material("")
            .render();
        drop(object);

        assert_eq!(bridge.calls.len(), 3); // transform, color, draw
    }

    #[test]
    fn test_state_carries_between_draws() {
        let mut bridge = RecordingBridge::default();
        let mut object = ObjectBuilder::new(&mut bridge);
        object
            .set_position(Vector3::new(1.0, 2.0, 3.0))
            .set_color(Vector4::new(1.0, 0.0, 0.0, 1.0))
            .render();
        object.set_scale(Vector3::new(2.0, 2.0, 2.0)).render();
        drop(object);

        let transforms: Vec<_> = bridge
            .calls
            .iter()
            .filter_map(|c| match c {
                BridgeCall::Transform { position, scale, .. } => Some((*position, *scale)),
                _ => None,
            })
            .collect();
        assert_eq!(
            transforms,
            vec![
                (Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 1.0, 1.0)),
                (Vector3::new(1.0, 2.0, 3.0), Vector3::new(2.0, 2.0, 2.0)),
            ]
        );
    }

    #[test]
    fn test_repeated_render_is_identical() {
        let mut bridge = RecordingBridge::with_textures(&["paper"]);
        bridge.add_material("soft");
        let mut object = ObjectBuilder::new(&mut bridge);
        object
            .set_mesh(MeshKind::Cone)
            .set_texture("paper")
            .set_material("soft")
            .render();
        object.render();
        drop(object);

        let half = bridge.calls.len() / 2;
        assert_eq!(bridge.calls[..half], bridge.calls[half..]);
        assert_eq!(bridge.draw_count(), 2);
    }

    #[test]
    fn test_reset_all_keeps_mesh() {
        let mut bridge = RecordingBridge::default();
        let mut object = ObjectBuilder::new(&mut bridge);
        object
            .set_mesh(MeshKind::HalfTorus)
            .set_position(Vector3::new(4.0, 4.0, 4.0))
            .set_rotation(Vector3::new(90.0, 0.0, 0.0))
            .set_texture("wood")
            .set_material("metal")
            .set_uv_scale(Vector2::new(1.0, 1.0))
            .reset_all();

        assert_eq!(
            object.state(),
            &DrawState {
                mesh: MeshKind::HalfTorus,
                ..DrawState::default()
            }
        );
    }

    #[test]
    fn test_random_sequences_track_last_write() {
        let mut rng = rand::rng();
        let mut bridge = RecordingBridge::default();
        let mut object = ObjectBuilder::new(&mut bridge);
        let mut expected = DrawState::default();

        for _ in 0..500 {
            let value: f32 = rng.random_range(-10.0..10.0);
            match rng.random_range(0..8) {
                0 => {
                    object.set_position(Vector3::new(value, 0.0, 0.0));
                    expected.position = Vector3::new(value, 0.0, 0.0);
                }
                1 => {
                    object.set_rotation(Vector3::new(0.0, value, 0.0));
                    expected.rotation = Vector3::new(0.0, value, 0.0);
                }
                2 => {
                    object.set_scale(Vector3::new(value, value, value));
                    expected.scale = Vector3::new(value, value, value);
                }
                3 => {
                    object.set_color(Vector4::new(value, 0.0, 0.0, 1.0));
                    expected.color = Vector4::new(value, 0.0, 0.0, 1.0);
                }
                4 => {
                    let tag = if value > 0.0 { "wood" } else { "" };
                    object.set_texture(tag);
                    expected.texture = optional_tag(tag);
                }
                5 => {
                    object.set_uv_scale(Vector2::new(value, value));
                    expected.uv_scale = Vector2::new(value, value);
                }
                6 => {
                    let mesh = MeshKind::ALL[rng.random_range(0..MeshKind::ALL.len())];
                    object.set_mesh(mesh);
                    expected.mesh = mesh;
                }
                _ => {
                    object.reset_all();
                    expected = DrawState {
                        mesh: expected.mesh,
                        ..DrawState::default()
                    };
                }
            }
            assert_eq!(object.state(), &expected);
        }
    }
}
