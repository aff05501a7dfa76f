//! Global uniform bindings for camera and scene lighting
//!
//! Manages the per-frame uniform buffer and bind group shared by every draw:
//! the camera matrices, the lighting switch and the four scene lights.

use cgmath::Vector3;

use crate::{
    gfx::{
        camera::camera_utils::CameraUniform,
        resources::{
            lighting::MAX_LIGHTS,
            uniforms::{names, UniformStore},
        },
    },
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// One light as laid out in the shader's `Light` struct
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLight {
    pub position: [f32; 3],
    pub focal_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_intensity: f32,
    pub diffuse_color: [f32; 3],
    _pad0: f32,
    pub specular_color: [f32; 3],
    _pad1: f32,
}

/// Global uniform buffer content
///
/// MUST match the `Globals` struct in `scene.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    pub view_proj: [[f32; 4]; 4],
    pub view_position: [f32; 4],
    pub use_lighting: u32,
    _padding: [u32; 3],
    pub lights: [GpuLight; MAX_LIGHTS],
}
// Total: 64 + 16 + 16 + 4 * 64 = 352 bytes

impl GlobalUBOContent {
    /// Packs the camera and the light uniforms currently held in `uniforms`
    pub fn from_state(camera: &CameraUniform, uniforms: &UniformStore) -> Self {
        let vec3 = |index: usize, field: &str| -> [f32; 3] {
            uniforms
                .vec3(&names::light_field(index, field))
                .unwrap_or(Vector3::new(0.0, 0.0, 0.0))
                .into()
        };
        let float = |index: usize, field: &str| -> f32 {
            uniforms
                .float(&names::light_field(index, field))
                .unwrap_or(0.0)
        };

        let mut lights = [GpuLight::default(); MAX_LIGHTS];
        for (index, light) in lights.iter_mut().enumerate() {
            light.position = vec3(index, names::LIGHT_POSITION);
            light.ambient_color = vec3(index, names::LIGHT_AMBIENT_COLOR);
            light.diffuse_color = vec3(index, names::LIGHT_DIFFUSE_COLOR);
            light.specular_color = vec3(index, names::LIGHT_SPECULAR_COLOR);
            light.focal_strength = float(index, names::LIGHT_FOCAL_STRENGTH);
            light.specular_intensity = float(index, names::LIGHT_SPECULAR_INTENSITY);
        }

        Self {
            view_proj: camera.view_proj,
            view_position: camera.view_position,
            use_lighting: uniforms.flag(names::USE_LIGHTING).unwrap_or(false) as u32,
            _padding: [0; 3],
            lights,
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Writes this frame's camera and lighting state into the global buffer
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: &CameraUniform,
    uniforms: &UniformStore,
) {
    ubo.update_content(queue, GlobalUBOContent::from_state(camera, uniforms));
}

/// Bind group layout and bind group for the global uniforms, bound at group 0
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: binding_types::uniform(),
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self {
            bind_group_layout,
            bind_group,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
