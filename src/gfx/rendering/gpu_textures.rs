//! wgpu-backed texture units
//!
//! [`GpuTextures`] is the [`TextureUploader`] the scene manager talks to on the
//! GPU path. Each bound slot gets its own texture+sampler bind group (group 2
//! of the scene pipeline); draws without a usable slot get a 1x1 white
//! fallback so the shader always has something to sample.

use std::{collections::HashMap, sync::Arc};

use image::RgbaImage;

use crate::{
    errors::{Result, SceneError},
    gfx::resources::{
        texture_registry::{DecodedImage, TextureHandle, TextureUploader},
        texture_resource::TextureResource,
    },
    wgpu_utils::binding_types,
};

pub struct GpuTextures {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    bind_group_layout: wgpu::BindGroupLayout,
    textures: HashMap<TextureHandle, TextureResource>,
    slot_groups: HashMap<usize, (TextureHandle, wgpu::BindGroup)>,
    fallback_group: wgpu::BindGroup,
    // Kept alive for `fallback_group`
    _fallback: TextureResource,
    next_handle: u32,
}

/// Layout of group 2: one filterable 2D texture and its sampler
pub fn texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Object Texture Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: binding_types::texture_2d(),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: binding_types::sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Rejects images the device cannot store as a single 2D texture
pub fn check_texture_size(label: &str, width: u32, height: u32, limit: u32) -> Result<()> {
    if width > limit || height > limit {
        return Err(SceneError::TextureTooLarge {
            path: label.into(),
            width,
            height,
            limit,
        });
    }
    Ok(())
}

impl GpuTextures {
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        bind_group_layout: wgpu::BindGroupLayout,
    ) -> Self {
        let fallback = TextureResource::create_fallback(&device, &queue);
        let fallback_group =
            Self::create_bind_group(&device, &bind_group_layout, &fallback, "Fallback");

        Self {
            device,
            queue,
            bind_group_layout,
            textures: HashMap::new(),
            slot_groups: HashMap::new(),
            fallback_group,
            _fallback: fallback,
            next_handle: 0,
        }
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        resource: &TextureResource,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Texture Bind Group", label)),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&resource.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&resource.sampler),
                },
            ],
        })
    }

    /// Bind group for texture unit `slot`, or the white fallback
    pub fn bind_group_for(&self, slot: Option<usize>) -> &wgpu::BindGroup {
        slot.and_then(|s| self.slot_groups.get(&s))
            .map_or(&self.fallback_group, |(_, group)| group)
    }
}

impl TextureUploader for GpuTextures {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> Result<TextureHandle> {
        let limit = self.device.limits().max_texture_dimension_2d;
        check_texture_size(label, image.width, image.height, limit)?;

        let unsupported = || SceneError::UnsupportedChannels {
            path: label.into(),
            channels: image.channels,
        };
        let rgba = image.to_rgba8().ok_or_else(unsupported)?;
        let rgba = RgbaImage::from_raw(image.width, image.height, rgba).ok_or_else(|| {
            SceneError::ImageDecode {
                path: label.into(),
                reason: format!(
                    "pixel buffer does not match {}x{}",
                    image.width, image.height
                ),
            }
        })?;

        let resource =
            TextureResource::create_scene_texture(&self.device, &self.queue, &rgba, label);
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.textures.insert(handle, resource);
        Ok(handle)
    }

    fn bind(&mut self, slot: usize, handle: TextureHandle) {
        let Some(resource) = self.textures.get(&handle) else {
            log::warn!("Cannot bind unknown texture {:?} to unit {}", handle, slot);
            return;
        };
        let group = Self::create_bind_group(
            &self.device,
            &self.bind_group_layout,
            resource,
            &format!("Unit {}", slot),
        );
        self.slot_groups.insert(slot, (handle, group));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.slot_groups.retain(|_, (bound, _)| *bound != handle);
        if let Some(resource) = self.textures.remove(&handle) {
            resource.texture.destroy();
        }
    }
}
