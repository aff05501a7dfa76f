//! Scene light sources
//!
//! The scene is lit by four fixed Phong point lights. They are written once as
//! named uniforms and stay in effect for every draw.

use cgmath::Vector3;

use super::uniforms::{names, ShaderUniforms};

/// Number of light sources the shader evaluates
pub const MAX_LIGHTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Specular exponent
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSource {
    /// Writes this light into `lightSources[index]`
    pub fn upload<S: ShaderUniforms + ?Sized>(&self, uniforms: &mut S, index: usize) {
        uniforms.set_vec3(&names::light_field(index, names::LIGHT_POSITION), self.position);
        uniforms.set_vec3(
            &names::light_field(index, names::LIGHT_AMBIENT_COLOR),
            self.ambient_color,
        );
        uniforms.set_vec3(
            &names::light_field(index, names::LIGHT_DIFFUSE_COLOR),
            self.diffuse_color,
        );
        uniforms.set_vec3(
            &names::light_field(index, names::LIGHT_SPECULAR_COLOR),
            self.specular_color,
        );
        uniforms.set_float(
            &names::light_field(index, names::LIGHT_FOCAL_STRENGTH),
            self.focal_strength,
        );
        uniforms.set_float(
            &names::light_field(index, names::LIGHT_SPECULAR_INTENSITY),
            self.specular_intensity,
        );
    }
}

fn grey(level: f32) -> Vector3<f32> {
    Vector3::new(level, level, level)
}

/// Room backlight, room light, outside light and the blue monitor glow
pub fn desk_lights() -> [LightSource; MAX_LIGHTS] {
    [
        LightSource {
            position: Vector3::new(-3.0, 10.0, 6.0),
            ambient_color: grey(0.1),
            diffuse_color: grey(0.5),
            specular_color: grey(0.2),
            focal_strength: 32.0,
            specular_intensity: 0.2,
        },
        LightSource {
            position: Vector3::new(0.0, 71.0, 0.0),
            ambient_color: grey(0.05),
            diffuse_color: grey(0.3),
            specular_color: grey(0.1),
            focal_strength: 20.0,
            specular_intensity: 0.1,
        },
        LightSource {
            position: Vector3::new(5.0, 70.0, -79.0),
            ambient_color: grey(0.3),
            diffuse_color: grey(0.8),
            specular_color: grey(0.0),
            focal_strength: 12.0,
            specular_intensity: 0.2,
        },
        LightSource {
            position: Vector3::new(-1.0, 7.4, -2.992),
            ambient_color: Vector3::new(0.0, 0.0, 0.2),
            diffuse_color: Vector3::new(0.0, 0.0, 0.8),
            specular_color: Vector3::new(0.0, 0.0, 0.5),
            focal_strength: 50.0,
            specular_intensity: 0.05,
        },
    ]
}

/// Turns lighting on and uploads every light
pub fn upload_lights<S: ShaderUniforms + ?Sized>(uniforms: &mut S, lights: &[LightSource]) {
    uniforms.set_bool(names::USE_LIGHTING, true);
    for (index, light) in lights.iter().take(MAX_LIGHTS).enumerate() {
        light.upload(uniforms, index);
    }
}
