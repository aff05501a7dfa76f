//! # Scene manager
//!
//! [`SceneManager`] owns the texture registry and material library and
//! translates draw requests into named shader uniforms. It is the
//! [`RenderBridge`] every [`ObjectBuilder`](super::object::ObjectBuilder)
//! submits through.
//!
//! The manager is generic over its three collaborators so the same code runs
//! against the wgpu backend and against in-memory doubles:
//!
//! - `S: ShaderUniforms` receives the uniform writes
//! - `M: ShapeMeshes<S>` loads and draws the primitive meshes
//! - `T: TextureUploader` creates, binds and releases textures

use std::path::Path;

use cgmath::{Deg, Matrix4, Vector2, Vector3, Vector4};

use crate::{
    errors::{Result, SceneError},
    gfx::resources::{
        lighting::{desk_lights, upload_lights},
        material::{desk_materials, MaterialLibrary, MaterialRecord},
        texture_registry::{ImageDecoder, TextureHandle, TextureRegistry, TextureUploader},
        uniforms::{names, ShaderUniforms},
    },
};

use super::{layout, meshes::MeshKind, meshes::ShapeMeshes};

/// Texture files loaded by [`SceneManager::prepare_scene`], with their tags
pub const SCENE_TEXTURES: [(&str, &str); 14] = [
    ("dark_ceramic.jpg", "dark_ceramic"),
    ("cement.jpeg", "cement"),
    ("clouds.png", "clouds"),
    ("grass.jpg", "grass"),
    ("drywall.jpg", "drywall"),
    ("dark_carpet.jpg", "dark_carpet"),
    ("wood.jpg", "wood"),
    ("green_vegetation.jpg", "green_vegetation"),
    ("keys.jpg", "keys"),
    ("water.jpg", "water"),
    ("orange_brick.jpg", "orange_brick"),
    ("paper.jpg", "paper"),
    ("pencil.jpg", "pencil"),
    ("homer.gif", "homer"),
];

/// The operations a draw-call builder needs from the renderer
pub trait RenderBridge {
    fn find_texture_slot(&self, tag: &str) -> Option<usize>;
    fn find_material(&self, tag: &str) -> Option<&MaterialRecord>;

    /// Sets the model matrix from scale, XYZ Euler angles in degrees and position
    fn submit_transform(
        &mut self,
        scale: Vector3<f32>,
        rotation: Vector3<f32>,
        position: Vector3<f32>,
    );
    /// Sets the flat color and switches texturing off
    fn submit_color(&mut self, color: Vector4<f32>);
    /// Switches texturing on and selects a texture unit, `None` selecting nothing
    fn submit_texture_slot(&mut self, slot: Option<usize>);
    fn submit_uv_scale(&mut self, uv_scale: Vector2<f32>);
    fn submit_material(&mut self, material: &MaterialRecord);
    fn draw_mesh(&mut self, kind: MeshKind);
}

/// Model matrix `T * Rx * Ry * Rz * S`
pub fn model_matrix(
    scale: Vector3<f32>,
    rotation: Vector3<f32>,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    Matrix4::from_translation(position)
        * Matrix4::from_angle_x(Deg(rotation.x))
        * Matrix4::from_angle_y(Deg(rotation.y))
        * Matrix4::from_angle_z(Deg(rotation.z))
        * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}

pub struct SceneManager<S, M, T>
where
    S: ShaderUniforms,
    M: ShapeMeshes<S>,
    T: TextureUploader,
{
    uniforms: S,
    meshes: M,
    uploader: T,
    decoder: Box<dyn ImageDecoder>,
    textures: TextureRegistry,
    materials: MaterialLibrary,
}

impl<S, M, T> SceneManager<S, M, T>
where
    S: ShaderUniforms,
    M: ShapeMeshes<S>,
    T: TextureUploader,
{
    pub fn new(uniforms: S, meshes: M, uploader: T, decoder: Box<dyn ImageDecoder>) -> Self {
        Self {
            uniforms,
            meshes,
            uploader,
            decoder,
            textures: TextureRegistry::new(),
            materials: MaterialLibrary::new(),
        }
    }

    /// Loads an image file as a texture under `tag` and returns its slot.
    ///
    /// On any failure the registry is left exactly as it was.
    pub fn load_texture(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<usize> {
        let path = path.as_ref();
        self.textures.ensure_capacity(tag)?;

        let image = self.decoder.decode(path)?;
        if image.channels != 3 && image.channels != 4 {
            return Err(SceneError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: image.channels,
            });
        }

        let handle = self.uploader.upload(&image, tag)?;
        let slot = match self.textures.register(tag, handle) {
            Ok(slot) => slot,
            Err(e) => {
                self.uploader.release(handle);
                return Err(e);
            }
        };

        log::info!(
            "Loaded image {} ({}x{}, {} channels) as '{}' in slot {}",
            path.display(),
            image.width,
            image.height,
            image.channels,
            tag,
            slot
        );
        Ok(slot)
    }

    /// Binds every registered texture to the unit matching its slot
    pub fn bind_textures(&mut self) {
        for entry in self.textures.slots() {
            self.uploader.bind(entry.slot, entry.handle);
        }
    }

    pub fn find_texture_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.textures.find_handle(tag)
    }

    /// Adds the desk scene materials to the library
    pub fn define_materials(&mut self) {
        for material in desk_materials() {
            self.materials.add(material);
        }
    }

    pub fn add_material(&mut self, material: MaterialRecord) {
        self.materials.add(material);
    }

    /// Enables lighting and uploads the four scene lights
    pub fn setup_lights(&mut self) {
        upload_lights(&mut self.uniforms, &desk_lights());
    }

    /// Materials, lights, textures from `texture_dir`, then every mesh.
    ///
    /// Textures that fail to load are logged and skipped; objects using them
    /// draw without a texture unit. Returns the number of textures loaded.
    pub fn prepare_scene(&mut self, texture_dir: &Path) -> usize {
        self.define_materials();
        self.setup_lights();

        let mut loaded = 0;
        for (file, tag) in SCENE_TEXTURES {
            match self.load_texture(texture_dir.join(file), tag) {
                Ok(_) => loaded += 1,
                Err(e) => log::warn!("Skipping texture '{}': {}", tag, e),
            }
        }
        self.bind_textures();

        for kind in MeshKind::ALL {
            self.meshes.load_mesh(kind);
        }

        log::info!(
            "Scene prepared: {} of {} textures, {} materials",
            loaded,
            SCENE_TEXTURES.len(),
            self.materials.len()
        );
        loaded
    }

    /// Replays the desk scene layout through this manager
    pub fn render_scene(&mut self) {
        layout::render_desk_scene(self);
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn uniforms(&self) -> &S {
        &self.uniforms
    }

    pub fn meshes(&self) -> &M {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut M {
        &mut self.meshes
    }

    pub fn uploader(&self) -> &T {
        &self.uploader
    }
}

impl<S, M, T> RenderBridge for SceneManager<S, M, T>
where
    S: ShaderUniforms,
    M: ShapeMeshes<S>,
    T: TextureUploader,
{
    fn find_texture_slot(&self, tag: &str) -> Option<usize> {
        self.textures.find_slot(tag)
    }

    fn find_material(&self, tag: &str) -> Option<&MaterialRecord> {
        self.materials.find(tag)
    }

    fn submit_transform(
        &mut self,
        scale: Vector3<f32>,
        rotation: Vector3<f32>,
        position: Vector3<f32>,
    ) {
        self.uniforms
            .set_mat4(names::MODEL, model_matrix(scale, rotation, position));
    }

    fn submit_color(&mut self, color: Vector4<f32>) {
        self.uniforms.set_bool(names::USE_TEXTURE, false);
        self.uniforms.set_vec4(names::OBJECT_COLOR, color);
    }

    fn submit_texture_slot(&mut self, slot: Option<usize>) {
        self.uniforms.set_bool(names::USE_TEXTURE, true);
        let unit = slot.map_or(-1, |s| s as i32);
        self.uniforms.set_sampler2d(names::OBJECT_TEXTURE, unit);
    }

    fn submit_uv_scale(&mut self, uv_scale: Vector2<f32>) {
        self.uniforms.set_vec2(names::UV_SCALE, uv_scale);
    }

    fn submit_material(&mut self, material: &MaterialRecord) {
        self.uniforms
            .set_vec3(names::MATERIAL_AMBIENT_COLOR, material.ambient_color);
        self.uniforms
            .set_float(names::MATERIAL_AMBIENT_STRENGTH, material.ambient_strength);
        self.uniforms
            .set_vec3(names::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
        self.uniforms
            .set_vec3(names::MATERIAL_SPECULAR_COLOR, material.specular_color);
        self.uniforms
            .set_float(names::MATERIAL_SHININESS, material.shininess);
    }

    fn draw_mesh(&mut self, kind: MeshKind) {
        self.meshes.draw_mesh(kind, &self.uniforms);
    }
}

impl<S, M, T> Drop for SceneManager<S, M, T>
where
    S: ShaderUniforms,
    M: ShapeMeshes<S>,
    T: TextureUploader,
{
    fn drop(&mut self) {
        for entry in self.textures.drain() {
            self.uploader.release(entry.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        resources::{texture_registry::MAX_TEXTURE_SLOTS, uniforms::UniformStore},
        scene::{
            object::ObjectBuilder,
            test_support::{test_manager, FakeDecoder, FakeUploader, RecordingMeshes, TestManager},
        },
    };
    use cgmath::{InnerSpace, SquareMatrix};

    fn manager_with(images: &[(&str, u8)]) -> TestManager {
        test_manager(FakeDecoder::with_images(images))
    }

    #[test]
    fn test_model_matrix_order() {
        let m = model_matrix(
            Vector3::new(2.0, 2.0, 2.0),
            Vector3::new(0.0, 90.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
        );
        // +X of the object: scaled by 2, turned onto -Z, then moved
        let p = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p - Vector4::new(1.0, 2.0, 1.0, 1.0)).magnitude() < 1e-5);

        let identity = model_matrix(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
        );
        assert_eq!(identity, Matrix4::identity());
    }

    #[test]
    fn test_rotation_applies_z_first() {
        let m = model_matrix(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(90.0, 0.0, 90.0),
            Vector3::new(0.0, 0.0, 0.0),
        );
        // Rz takes +X to +Y, then Rx takes +Y to +Z
        let p = m * Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert!((p - Vector4::new(0.0, 0.0, 1.0, 0.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_load_texture_assigns_slots_in_order() {
        let mut scene = manager_with(&[("a.png", 3), ("b.png", 4)]);
        assert_eq!(scene.load_texture("a.png", "first").unwrap(), 0);
        assert_eq!(scene.load_texture("b.png", "second").unwrap(), 1);

        assert_eq!(scene.find_texture_slot("second"), Some(1));
        assert_eq!(scene.find_texture_slot("never"), None);
        assert!(scene.find_texture_handle("first").is_some());
        assert_eq!(scene.uploader().uploaded.len(), 2);
    }

    #[test]
    fn test_unsupported_channels_leave_table_unchanged() {
        let mut scene = manager_with(&[("ok.png", 3), ("grey.png", 1), ("ga.png", 2)]);
        scene.load_texture("ok.png", "ok").unwrap();

        let err = scene.load_texture("grey.png", "grey").unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedChannels { channels: 1, .. }));
        let err = scene.load_texture("ga.png", "ga").unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedChannels { channels: 2, .. }));

        assert_eq!(scene.textures().len(), 1);
        assert_eq!(scene.uploader().uploaded.len(), 1);
    }

    #[test]
    fn test_oversized_texture_leaves_table_unchanged() {
        let uploader = FakeUploader {
            max_dimension: Some(1),
            ..FakeUploader::default()
        };
        let decoder = FakeDecoder::with_images(&[("wood.jpg", 3)]);
        let mut scene: TestManager = SceneManager::new(
            UniformStore::new(),
            RecordingMeshes::default(),
            uploader,
            Box::new(decoder),
        );

        let err = scene.load_texture("wood.jpg", "wood").unwrap_err();
        assert!(matches!(err, SceneError::TextureTooLarge { limit: 1, .. }));
        assert!(scene.textures().is_empty());
        assert!(scene.uploader().uploaded.is_empty());

        // prepare_scene logs the rejection and carries on
        assert_eq!(scene.prepare_scene(Path::new("")), 0);
        assert_eq!(scene.find_texture_slot("wood"), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut scene = manager_with(&[]);
        let err = scene.load_texture("nope.png", "nope").unwrap_err();
        assert!(matches!(err, SceneError::ImageDecode { .. }));
        assert!(scene.textures().is_empty());
    }

    #[test]
    fn test_seventeenth_texture_is_rejected() {
        let mut scene = manager_with(&[("t.png", 4)]);
        for i in 0..MAX_TEXTURE_SLOTS {
            assert_eq!(scene.load_texture("t.png", &format!("t{}", i)).unwrap(), i);
        }
        let err = scene.load_texture("t.png", "extra").unwrap_err();
        assert!(matches!(err, SceneError::TextureCapacity { .. }));
        assert_eq!(scene.textures().len(), MAX_TEXTURE_SLOTS);
        assert_eq!(scene.uploader().uploaded.len(), MAX_TEXTURE_SLOTS);
    }

    #[test]
    fn test_bind_textures_uses_slot_units() {
        let mut scene = manager_with(&[("t.png", 3)]);
        scene.load_texture("t.png", "x").unwrap();
        scene.load_texture("t.png", "y").unwrap();
        scene.bind_textures();

        let y = scene.find_texture_handle("y").unwrap();
        assert_eq!(scene.uploader().bound.get(&1), Some(&y));
        assert_eq!(scene.uploader().bound.len(), 2);
    }

    #[test]
    fn test_drop_releases_handles() {
        let mut scene = manager_with(&[("t.png", 3)]);
        scene.load_texture("t.png", "x").unwrap();
        scene.load_texture("t.png", "y").unwrap();
        let released = scene.uploader().released.clone();
        drop(scene);
        assert_eq!(released.borrow().len(), 2);
    }

    #[test]
    fn test_find_material_first_match() {
        let mut scene = manager_with(&[]);
        scene.define_materials();
        scene.add_material(MaterialRecord::new(
            "metal",
            Vector3::new(1.0, 1.0, 1.0),
            1.0,
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, 1.0),
            1.0,
        ));
        assert_eq!(scene.find_material("metal").map(|m| m.shininess), Some(22.0));
        assert!(scene.find_material("gold").is_none());
    }

    #[test]
    fn test_setup_lights_turns_lighting_on() {
        let mut scene = manager_with(&[]);
        scene.setup_lights();
        assert_eq!(scene.uniforms().flag(names::USE_LIGHTING), Some(true));
        assert_eq!(
            scene.uniforms().vec3("lightSources[0].position"),
            Some(Vector3::new(-3.0, 10.0, 6.0))
        );
    }

    #[test]
    fn test_color_then_texture_toggles_texture_mode() {
        let mut scene = manager_with(&[]);
        scene.submit_texture_slot(Some(3));
        assert_eq!(scene.uniforms().flag(names::USE_TEXTURE), Some(true));
        scene.submit_color(Vector4::new(0.1, 0.2, 0.3, 1.0));
        assert_eq!(scene.uniforms().flag(names::USE_TEXTURE), Some(false));
        // Sampler keeps its last unit
        assert_eq!(scene.uniforms().int(names::OBJECT_TEXTURE), Some(3));

        scene.submit_texture_slot(None);
        assert_eq!(scene.uniforms().int(names::OBJECT_TEXTURE), Some(-1));
    }

    #[test]
    fn test_end_to_end_draw() {
        let mut scene = manager_with(&[("wood.jpg", 3)]);
        scene.load_texture("wood.jpg", "wood").unwrap();
        scene.meshes_mut().load_mesh(MeshKind::Box);

        ObjectBuilder::new(&mut scene)
            .set_position(Vector3::new(1.0, 2.0, 3.0))
            .set_rotation(Vector3::new(0.0, 90.0, 0.0))
            .set_scale(Vector3::new(2.0, 2.0, 2.0))
            .set_color(Vector4::new(1.0, 0.0, 0.0, 1.0))
            .set_texture("wood")
            .render();

        let draws = &scene.meshes().draws;
        assert_eq!(draws.len(), 1);
        let (kind, uniforms) = &draws[0];
        assert_eq!(*kind, MeshKind::Box);

        let expected = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::from_angle_y(Deg(90.0))
            * Matrix4::from_scale(2.0);
        assert_eq!(uniforms.mat4(names::MODEL), Some(expected));
        assert_eq!(
            uniforms.vec4(names::OBJECT_COLOR),
            Some(Vector4::new(1.0, 0.0, 0.0, 1.0))
        );
        assert_eq!(uniforms.flag(names::USE_TEXTURE), Some(true));
        assert_eq!(uniforms.int(names::OBJECT_TEXTURE), Some(0));
    }

    #[test]
    fn test_unknown_material_keeps_previous_uniforms() {
        let mut scene = manager_with(&[]);
        scene.define_materials();
        scene.meshes_mut().load_mesh(MeshKind::Box);

        let mut object = ObjectBuilder::new(&mut scene);
        object.set_material("glass").render();
        object.set_material("nonexistent").render();
        drop(object);

        let draws = &scene.meshes().draws;
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[1].1.float(names::MATERIAL_SHININESS), Some(85.0));
    }

    #[test]
    fn test_draw_of_unloaded_mesh_is_dropped() {
        let mut scene = manager_with(&[]);
        ObjectBuilder::new(&mut scene).set_mesh(MeshKind::Sphere).render();
        assert!(scene.meshes().draws.is_empty());

        scene.meshes_mut().load_mesh(MeshKind::Sphere);
        let mut object = ObjectBuilder::new(&mut scene);
        object.set_mesh(MeshKind::Sphere).render();
        object.set_mesh(MeshKind::Cone).render();
        drop(object);

        let draws = &scene.meshes().draws;
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].0, MeshKind::Sphere);
    }

    #[test]
    fn test_prepare_scene_tolerates_missing_textures() {
        let mut scene = manager_with(&[("wood.jpg", 3), ("paper.jpg", 4), ("homer.gif", 1)]);
        let loaded = scene.prepare_scene(Path::new(""));

        assert_eq!(loaded, 2);
        assert_eq!(scene.find_texture_slot("wood"), Some(0));
        assert_eq!(scene.find_texture_slot("paper"), Some(1));
        assert_eq!(scene.find_texture_slot("homer"), None);
        assert_eq!(scene.materials().len(), 8);
        assert_eq!(scene.meshes().loaded.len(), MeshKind::ALL.len());
        assert_eq!(scene.uploader().bound.len(), 2);
    }

    #[test]
    fn test_uniform_store_backs_the_bridge() {
        let scene: TestManager = manager_with(&[]);
        let store: &UniformStore = scene.uniforms();
        assert!(store.is_empty());
    }
}
