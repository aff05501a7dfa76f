//! Named shader uniforms
//!
//! The scene talks to its shader through a small set of named uniforms, the
//! same way a GL program exposes `uniform` variables. [`ShaderUniforms`] is the
//! setter interface; [`UniformStore`] is the retained state the wgpu backend
//! packs into uniform blocks before each draw.

use std::collections::HashMap;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Uniform names understood by the scene shader.
pub mod names {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    pub const LIGHT_POSITION: &str = "position";
    pub const LIGHT_AMBIENT_COLOR: &str = "ambientColor";
    pub const LIGHT_DIFFUSE_COLOR: &str = "diffuseColor";
    pub const LIGHT_SPECULAR_COLOR: &str = "specularColor";
    pub const LIGHT_FOCAL_STRENGTH: &str = "focalStrength";
    pub const LIGHT_SPECULAR_INTENSITY: &str = "specularIntensity";

    /// Full name of one field of `lightSources[index]`
    pub fn light_field(index: usize, field: &str) -> String {
        format!("lightSources[{}].{}", index, field)
    }
}

/// Setter interface of the shader program the scene draws with.
pub trait ShaderUniforms {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    /// Sets a sampler to a texture unit; `-1` selects no unit
    fn set_sampler2d(&mut self, name: &str, unit: i32);
}

/// A single stored uniform value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Matrix4<f32>),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Float(f32),
    Bool(bool),
    Int(i32),
    Sampler2D(i32),
}

/// Retained uniform state keyed by name.
///
/// A value stays in effect until it is overwritten, so draws inherit whatever
/// the previous draw left behind.
#[derive(Debug, Clone, Default)]
pub struct UniformStore {
    values: HashMap<String, UniformValue>,
}

impl UniformStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    pub fn mat4(&self, name: &str) -> Option<Matrix4<f32>> {
        match self.get(name)? {
            UniformValue::Mat4(m) => Some(m),
            _ => None,
        }
    }

    pub fn vec2(&self, name: &str) -> Option<Vector2<f32>> {
        match self.get(name)? {
            UniformValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<Vector3<f32>> {
        match self.get(name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec4(&self, name: &str) -> Option<Vector4<f32>> {
        match self.get(name)? {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Integer view of an int or sampler uniform
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            UniformValue::Int(i) | UniformValue::Sampler2D(i) => Some(i),
            _ => None,
        }
    }

    /// Boolean view; ints count as true when non-zero, like GLSL bool uniforms
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            UniformValue::Bool(b) => Some(b),
            UniformValue::Int(i) => Some(i != 0),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn store(&mut self, name: &str, value: UniformValue) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }
}

impl ShaderUniforms for UniformStore {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.store(name, UniformValue::Mat4(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.store(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.store(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.store(name, UniformValue::Vec4(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.store(name, UniformValue::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.store(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.store(name, UniformValue::Int(value));
    }

    fn set_sampler2d(&mut self, name: &str, unit: i32) {
        self.store(name, UniformValue::Sampler2D(unit));
    }
}
