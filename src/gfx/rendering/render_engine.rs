//! WGPU-based rendering engine for the desk scene
//!
//! Owns the surface, device, depth buffer and the single scene pipeline. Each
//! frame the scene layout is replayed through the [`SceneManager`], the
//! recorded draws are packed into one dynamic-offset uniform buffer, and
//! everything is drawn in a single depth-tested pass.

use std::sync::Arc;

use anyhow::Context;
use winit::window::Window;

use crate::{
    config::SceneConfig,
    errors::SceneError,
    gfx::{
        camera::camera_utils::CameraUniform,
        resources::{
            global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO},
            texture_registry::ImageFileDecoder,
            texture_resource::TextureResource,
            uniforms::UniformStore,
        },
        scene::{layout::DESK_SCENE_DRAW_COUNT, SceneManager},
    },
    wgpu_utils::binding_types,
};

use super::{
    gpu_meshes::{DrawGpuMesh, GpuMeshLibrary, ObjectUniform, RecordedDraw},
    gpu_textures::{texture_bind_group_layout, GpuTextures},
    pipeline_manager::{PipelineConfig, PipelineManager},
};

/// Scene manager wired to the wgpu backend
pub type GpuScene = SceneManager<UniformStore, GpuMeshLibrary, GpuTextures>;

const SCENE_PIPELINE: &str = "Scene";

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Rounds `size` up to a multiple of `alignment`
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

/// One uniform buffer holding every draw's [`ObjectUniform`], bound at group 1
/// with a dynamic offset per draw
struct ObjectBuffer {
    layout: wgpu::BindGroupLayout,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stride: u64,
    capacity: usize,
    staging: Vec<u8>,
}

impl ObjectBuffer {
    const ELEMENT_SIZE: u64 = std::mem::size_of::<ObjectUniform>() as u64;

    fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let stride = aligned_stride(
            Self::ELEMENT_SIZE,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: binding_types::dynamic_uniform(Self::ELEMENT_SIZE),
                count: None,
            }],
        });

        let (buffer, bind_group) = Self::allocate(device, &layout, stride, capacity);
        Self {
            layout,
            buffer,
            bind_group,
            stride,
            capacity,
            staging: Vec::new(),
        }
    }

    fn allocate(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        stride: u64,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(Self::ELEMENT_SIZE),
                }),
            }],
        });

        (buffer, bind_group)
    }

    /// Uploads one uniform block per draw, growing the buffer if needed
    fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, draws: &[RecordedDraw]) {
        if draws.len() > self.capacity {
            let capacity = draws.len().next_power_of_two();
            log::debug!(
                "Growing object buffer from {} to {} draws",
                self.capacity,
                capacity
            );
            let (buffer, bind_group) = Self::allocate(device, &self.layout, self.stride, capacity);
            self.buffer.destroy();
            self.buffer = buffer;
            self.bind_group = bind_group;
            self.capacity = capacity;
        }
        if draws.is_empty() {
            return;
        }

        let stride = self.stride as usize;
        self.staging.clear();
        self.staging.resize(stride * draws.len(), 0);
        for (i, draw) in draws.iter().enumerate() {
            let bytes = bytemuck::bytes_of(&draw.object);
            self.staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.buffer, 0, &self.staging);
    }

    fn offset(&self, index: usize) -> u32 {
        (index as u64 * self.stride) as u32
    }
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_buffer: ObjectBuffer,
    texture_layout: wgpu::BindGroupLayout,
}

impl RenderEngine {
    /// Creates the engine for `window` and builds the scene pipeline.
    ///
    /// Fails with [`SceneError::GpuInit`] when no adapter, device or surface
    /// can be obtained.
    pub async fn new(window: Arc<Window>, scene_config: &SceneConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| SceneError::GpuInit(format!("surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| SceneError::GpuInit(format!("adapter: {}", e)))?;
        log::info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| SceneError::GpuInit(format!("device: {}", e)))?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .context("surface reports no supported formats")?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: if scene_config.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let object_buffer = ObjectBuffer::new(&device, DESK_SCENE_DRAW_COUNT);
        let texture_layout = texture_bind_group_layout(&device);

        let device: Arc<wgpu::Device> = device.into();
        let queue: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device.clone());

        pipeline_manager.load_shader("scene", include_str!("scene.wgsl"));
        // No culling: planes and half shapes are seen from both sides
        pipeline_manager.register_pipeline(
            SCENE_PIPELINE,
            PipelineConfig::default()
                .with_label("Scene Pipeline")
                .with_shader("scene")
                .with_cull_mode(None)
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_blended_target(format)
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    object_buffer.layout.clone(),
                    texture_layout.clone(),
                ]),
        );
        pipeline_manager
            .create_all_pipelines()
            .map_err(|errors| SceneError::GpuInit(errors.join("; ")))?;

        log::info!("Render engine ready: {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            pipeline_manager,
            global_ubo,
            global_bindings,
            object_buffer,
            texture_layout,
        })
    }

    /// A scene manager whose meshes and textures live on this engine's device
    pub fn create_scene(&self) -> GpuScene {
        SceneManager::new(
            UniformStore::new(),
            GpuMeshLibrary::new(self.device.clone()),
            GpuTextures::new(
                self.device.clone(),
                self.queue.clone(),
                self.texture_layout.clone(),
            ),
            Box::new(ImageFileDecoder),
        )
    }

    /// Replays the scene and draws it.
    ///
    /// Surface errors are returned so the caller can reconfigure on
    /// `Lost`/`Outdated`.
    pub fn render_frame(
        &mut self,
        scene: &mut GpuScene,
        camera: &CameraUniform,
    ) -> Result<(), wgpu::SurfaceError> {
        scene.render_scene();
        let draws = scene.meshes_mut().take_draws();

        update_global_ubo(&mut self.global_ubo, &self.queue, camera, scene.uniforms());
        self.object_buffer.write(&self.device, &self.queue, &draws);

        let surface_texture = self.surface.get_current_texture()?;
        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(pipeline) = self.pipeline_manager.get_pipeline(SCENE_PIPELINE) {
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

                for (i, draw) in draws.iter().enumerate() {
                    let Some(mesh) = scene.meshes().mesh(draw.kind) else {
                        continue;
                    };
                    render_pass.set_bind_group(
                        1,
                        &self.object_buffer.bind_group,
                        &[self.object_buffer.offset(i)],
                    );
                    render_pass.set_bind_group(
                        2,
                        scene.uploader().bind_group_for(draw.object.bound_slot()),
                        &[],
                    );
                    render_pass.draw_gpu_mesh(mesh);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Reconfigures the surface and recreates the depth buffer.
    ///
    /// Zero sizes (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
        log::debug!("Surface resized to {}x{}", width, height);
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
