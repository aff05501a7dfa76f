//! GPU side of the primitive meshes
//!
//! [`GpuMeshLibrary`] uploads one vertex/index buffer pair per [`MeshKind`] and
//! turns every `draw_mesh` into a [`RecordedDraw`]: a snapshot of the object
//! uniforms packed for the shader. The render engine replays the recorded
//! draws inside a single render pass.

use std::{collections::HashMap, sync::Arc};

use cgmath::{Matrix, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};
use wgpu::util::DeviceExt;

use crate::gfx::{
    resources::uniforms::{names, UniformStore},
    scene::meshes::{MeshKind, ShapeMeshes},
};

/// Per-draw uniform block
///
/// MUST match the `ObjectUniform` struct in `scene.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub texture_slot: i32,
    /// rgb ambient color, w ambient strength
    pub ambient: [f32; 4],
    /// rgb diffuse color, w shininess
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}
// Total: 64 + 64 + 16 + 16 + 3 * 16 = 208 bytes

impl ObjectUniform {
    /// Packs the object and material uniforms currently held in `uniforms`.
    ///
    /// Uniforms that were never set read as zero, the model matrix as identity.
    pub fn from_uniforms(uniforms: &UniformStore) -> Self {
        let zero3 = Vector3::new(0.0, 0.0, 0.0);
        let model = uniforms
            .mat4(names::MODEL)
            .unwrap_or_else(Matrix4::identity);
        let normal_matrix = model
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or_else(Matrix4::identity);

        let ambient = uniforms
            .vec3(names::MATERIAL_AMBIENT_COLOR)
            .unwrap_or(zero3);
        let diffuse = uniforms
            .vec3(names::MATERIAL_DIFFUSE_COLOR)
            .unwrap_or(zero3);
        let specular = uniforms
            .vec3(names::MATERIAL_SPECULAR_COLOR)
            .unwrap_or(zero3);

        Self {
            model: model.into(),
            normal_matrix: normal_matrix.into(),
            object_color: uniforms
                .vec4(names::OBJECT_COLOR)
                .unwrap_or(Vector4::new(0.0, 0.0, 0.0, 1.0))
                .into(),
            uv_scale: uniforms
                .vec2(names::UV_SCALE)
                .unwrap_or(Vector2::new(0.0, 0.0))
                .into(),
            use_texture: uniforms.flag(names::USE_TEXTURE).unwrap_or(false) as u32,
            texture_slot: uniforms.int(names::OBJECT_TEXTURE).unwrap_or(-1),
            ambient: ambient
                .extend(uniforms.float(names::MATERIAL_AMBIENT_STRENGTH).unwrap_or(0.0))
                .into(),
            diffuse: diffuse
                .extend(uniforms.float(names::MATERIAL_SHININESS).unwrap_or(0.0))
                .into(),
            specular: specular.extend(0.0).into(),
        }
    }

    /// Texture unit this draw samples from, if texturing is on and a unit is selected
    pub fn bound_slot(&self) -> Option<usize> {
        if self.use_texture != 0 && self.texture_slot >= 0 {
            Some(self.texture_slot as usize)
        } else {
            None
        }
    }
}

/// One draw waiting for the next render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedDraw {
    pub kind: MeshKind,
    pub object: ObjectUniform,
}

impl RecordedDraw {
    pub fn new(kind: MeshKind, uniforms: &UniformStore) -> Self {
        Self {
            kind,
            object: ObjectUniform::from_uniforms(uniforms),
        }
    }
}

/// Vertex and index buffers of one uploaded primitive
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    pub fn new(device: &wgpu::Device, kind: MeshKind) -> Self {
        let (vertices, indices) = kind.generate().to_scene_format();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", kind)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", kind)),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

pub trait DrawGpuMesh {
    fn draw_gpu_mesh(&mut self, mesh: &GpuMesh);
}

impl DrawGpuMesh for wgpu::RenderPass<'_> {
    fn draw_gpu_mesh(&mut self, mesh: &GpuMesh) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}

/// Uploaded primitive meshes plus the draws recorded since the last frame
pub struct GpuMeshLibrary {
    device: Arc<wgpu::Device>,
    meshes: HashMap<MeshKind, GpuMesh>,
    draws: Vec<RecordedDraw>,
}

impl GpuMeshLibrary {
    pub fn new(device: Arc<wgpu::Device>) -> Self {
        Self {
            device,
            meshes: HashMap::new(),
            draws: Vec::new(),
        }
    }

    pub fn mesh(&self, kind: MeshKind) -> Option<&GpuMesh> {
        self.meshes.get(&kind)
    }

    /// Hands over the recorded draws, leaving the list empty for the next frame
    pub fn take_draws(&mut self) -> Vec<RecordedDraw> {
        std::mem::take(&mut self.draws)
    }
}

impl ShapeMeshes<UniformStore> for GpuMeshLibrary {
    fn load_mesh(&mut self, kind: MeshKind) {
        if self.meshes.contains_key(&kind) {
            return;
        }
        let mesh = GpuMesh::new(&self.device, kind);
        log::debug!("Uploaded {} mesh ({} indices)", kind, mesh.index_count());
        self.meshes.insert(kind, mesh);
    }

    fn draw_mesh(&mut self, kind: MeshKind, uniforms: &UniformStore) {
        if !self.meshes.contains_key(&kind) {
            log::warn!("Draw of {} skipped: mesh was never loaded", kind);
            return;
        }
        self.draws.push(RecordedDraw::new(kind, uniforms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::uniforms::ShaderUniforms;
    use cgmath::Deg;

    #[test]
    fn test_layout_size() {
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 208);
        assert_eq!(std::mem::offset_of!(ObjectUniform, uv_scale), 144);
        assert_eq!(std::mem::offset_of!(ObjectUniform, texture_slot), 156);
        assert_eq!(std::mem::offset_of!(ObjectUniform, ambient), 160);
    }

    #[test]
    fn test_empty_store_packs_defaults() {
        let object = ObjectUniform::from_uniforms(&UniformStore::new());
        let identity: [[f32; 4]; 4] = Matrix4::identity().into();
        assert_eq!(object.model, identity);
        assert_eq!(object.normal_matrix, identity);
        assert_eq!(object.object_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(object.use_texture, 0);
        assert_eq!(object.texture_slot, -1);
        assert_eq!(object.bound_slot(), None);
    }

    #[test]
    fn test_packs_material_and_texture() {
        let mut store = UniformStore::new();
        store.set_vec4(names::OBJECT_COLOR, Vector4::new(0.2, 0.4, 0.6, 0.5));
        store.set_vec2(names::UV_SCALE, Vector2::new(3.0, 1.0));
        store.set_bool(names::USE_TEXTURE, true);
        store.set_sampler2d(names::OBJECT_TEXTURE, 5);
        store.set_vec3(names::MATERIAL_AMBIENT_COLOR, Vector3::new(0.1, 0.1, 0.1));
        store.set_float(names::MATERIAL_AMBIENT_STRENGTH, 0.3);
        store.set_vec3(names::MATERIAL_DIFFUSE_COLOR, Vector3::new(0.7, 0.6, 0.5));
        store.set_float(names::MATERIAL_SHININESS, 22.0);
        store.set_vec3(names::MATERIAL_SPECULAR_COLOR, Vector3::new(0.9, 0.9, 0.9));

        let object = ObjectUniform::from_uniforms(&store);
        assert_eq!(object.object_color, [0.2, 0.4, 0.6, 0.5]);
        assert_eq!(object.uv_scale, [3.0, 1.0]);
        assert_eq!(object.bound_slot(), Some(5));
        assert_eq!(object.ambient, [0.1, 0.1, 0.1, 0.3]);
        assert_eq!(object.diffuse, [0.7, 0.6, 0.5, 22.0]);
        assert_eq!(object.specular, [0.9, 0.9, 0.9, 0.0]);
    }

    #[test]
    fn test_texture_off_ignores_slot() {
        let mut store = UniformStore::new();
        store.set_sampler2d(names::OBJECT_TEXTURE, 2);
        store.set_bool(names::USE_TEXTURE, false);
        assert_eq!(ObjectUniform::from_uniforms(&store).bound_slot(), None);

        store.set_bool(names::USE_TEXTURE, true);
        store.set_sampler2d(names::OBJECT_TEXTURE, -1);
        assert_eq!(ObjectUniform::from_uniforms(&store).bound_slot(), None);
    }

    #[test]
    fn test_normal_matrix_undoes_nonuniform_scale() {
        let mut store = UniformStore::new();
        let model =
            Matrix4::from_angle_y(Deg(30.0)) * Matrix4::from_nonuniform_scale(2.0, 1.0, 4.0);
        store.set_mat4(names::MODEL, model);

        let object = ObjectUniform::from_uniforms(&store);
        let expected: [[f32; 4]; 4] = model.invert().unwrap().transpose().into();
        for (a, b) in object
            .normal_matrix
            .iter()
            .flatten()
            .zip(expected.iter().flatten())
        {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_recorded_draw_keeps_kind() {
        let draw = RecordedDraw::new(MeshKind::HalfTorus, &UniformStore::new());
        assert_eq!(draw.kind, MeshKind::HalfTorus);
    }
}
