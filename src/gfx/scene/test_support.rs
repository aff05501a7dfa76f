//! In-memory collaborators for exercising the scene without a GPU

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    path::Path,
    rc::Rc,
};

use cgmath::{Vector2, Vector3, Vector4};

use crate::{
    errors::{Result, SceneError},
    gfx::{
        rendering::gpu_textures::check_texture_size,
        resources::{
            material::MaterialRecord,
            texture_registry::{DecodedImage, ImageDecoder, TextureHandle, TextureUploader},
            uniforms::UniformStore,
        },
    },
};

use super::{
    meshes::{MeshKind, ShapeMeshes},
    scene_manager::{RenderBridge, SceneManager},
};

pub type TestManager = SceneManager<UniformStore, RecordingMeshes, FakeUploader>;

pub fn test_manager(decoder: FakeDecoder) -> TestManager {
    SceneManager::new(
        UniformStore::new(),
        RecordingMeshes::default(),
        FakeUploader::default(),
        Box::new(decoder),
    )
}

/// Records each draw of a loaded mesh with a snapshot of the uniforms it saw
///
/// Draws of kinds that were never loaded are dropped, as on the GPU path.
#[derive(Default)]
pub struct RecordingMeshes {
    pub loaded: HashSet<MeshKind>,
    pub draws: Vec<(MeshKind, UniformStore)>,
}

impl ShapeMeshes<UniformStore> for RecordingMeshes {
    fn load_mesh(&mut self, kind: MeshKind) {
        self.loaded.insert(kind);
    }

    fn draw_mesh(&mut self, kind: MeshKind, uniforms: &UniformStore) {
        if !self.loaded.contains(&kind) {
            return;
        }
        self.draws.push((kind, uniforms.clone()));
    }
}

#[derive(Default)]
pub struct FakeUploader {
    pub(crate) next_handle: u32,
    /// Largest width or height accepted, like a device texture limit
    pub max_dimension: Option<u32>,
    pub uploaded: Vec<(String, u32, u32)>,
    pub bound: HashMap<usize, TextureHandle>,
    pub released: Rc<RefCell<Vec<TextureHandle>>>,
}

impl TextureUploader for FakeUploader {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> Result<TextureHandle> {
        if let Some(limit) = self.max_dimension {
            check_texture_size(label, image.width, image.height, limit)?;
        }
        self.next_handle += 1;
        self.uploaded
            .push((label.to_string(), image.width, image.height));
        Ok(TextureHandle(self.next_handle))
    }

    fn bind(&mut self, slot: usize, handle: TextureHandle) {
        self.bound.insert(slot, handle);
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.borrow_mut().push(handle);
    }
}

/// Serves 2x2 images with a fixed channel count per path
#[derive(Default)]
pub struct FakeDecoder {
    images: HashMap<String, u8>,
}

impl FakeDecoder {
    pub fn with_images(images: &[(&str, u8)]) -> Self {
        Self {
            images: images
                .iter()
                .map(|(path, channels)| (path.to_string(), *channels))
                .collect(),
        }
    }
}

impl ImageDecoder for FakeDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let key = path.to_string_lossy().into_owned();
        match self.images.get(&key) {
            Some(&channels) => Ok(DecodedImage {
                pixels: vec![128; 4 * channels as usize],
                width: 2,
                height: 2,
                channels,
            }),
            None => Err(SceneError::ImageDecode {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    Transform {
        scale: Vector3<f32>,
        rotation: Vector3<f32>,
        position: Vector3<f32>,
    },
    Color(Vector4<f32>),
    TextureSlot(Option<usize>),
    UvScale(Vector2<f32>),
    Material(String),
    Draw(MeshKind),
}

/// Bridge that logs calls instead of touching uniforms
#[derive(Default)]
pub struct RecordingBridge {
    textures: Vec<String>,
    materials: Vec<MaterialRecord>,
    pub calls: Vec<BridgeCall>,
}

impl RecordingBridge {
    pub fn with_textures(tags: &[&str]) -> Self {
        Self {
            textures: tags.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn add_material(&mut self, tag: &str) {
        let grey = Vector3::new(0.5, 0.5, 0.5);
        self.materials
            .push(MaterialRecord::new(tag, grey, 0.5, grey, grey, 8.0));
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, BridgeCall::Draw(_)))
            .count()
    }
}

impl RenderBridge for RecordingBridge {
    fn find_texture_slot(&self, tag: &str) -> Option<usize> {
        self.textures.iter().position(|t| t == tag)
    }

    fn find_material(&self, tag: &str) -> Option<&MaterialRecord> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    fn submit_transform(
        &mut self,
        scale: Vector3<f32>,
        rotation: Vector3<f32>,
        position: Vector3<f32>,
    ) {
        self.calls.push(BridgeCall::Transform {
            scale,
            rotation,
            position,
        });
    }

    fn submit_color(&mut self, color: Vector4<f32>) {
        self.calls.push(BridgeCall::Color(color));
    }

    fn submit_texture_slot(&mut self, slot: Option<usize>) {
        self.calls.push(BridgeCall::TextureSlot(slot));
    }

    fn submit_uv_scale(&mut self, uv_scale: Vector2<f32>) {
        self.calls.push(BridgeCall::UvScale(uv_scale));
    }

    fn submit_material(&mut self, material: &MaterialRecord) {
        self.calls.push(BridgeCall::Material(material.tag.clone()));
    }

    fn draw_mesh(&mut self, kind: MeshKind) {
        self.calls.push(BridgeCall::Draw(kind));
    }
}
