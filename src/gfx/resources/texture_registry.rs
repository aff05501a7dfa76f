//! Texture registry
//!
//! A fixed table of up to [`MAX_TEXTURE_SLOTS`] textures, each associated with
//! a tag string. Slot indices double as texture unit numbers, so the order in
//! which textures are registered is the order the shader sees them in.
//!
//! Decoding and GPU upload sit behind the [`ImageDecoder`] and
//! [`TextureUploader`] traits so the table logic can run without a window.

use std::path::Path;

use crate::errors::{Result, SceneError};

/// Number of texture units available to the scene shader
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Opaque handle to a texture owned by a [`TextureUploader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// A registered texture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSlot {
    pub tag: String,
    pub handle: TextureHandle,
    pub slot: usize,
}

/// Tightly packed 8-bit pixels, bottom row first
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl DecodedImage {
    /// Pixels expanded to RGBA8, or `None` for layouts other than RGB and RGBA
    pub fn to_rgba8(&self) -> Option<Vec<u8>> {
        match self.channels {
            4 => Some(self.pixels.clone()),
            3 => Some(
                self.pixels
                    .chunks_exact(3)
                    .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Reads image files into memory
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage>;
}

/// Creates, binds and destroys GPU textures
pub trait TextureUploader {
    /// Uploads a 3 or 4 channel image as a mipmapped, repeating, linearly filtered texture
    fn upload(&mut self, image: &DecodedImage, label: &str) -> Result<TextureHandle>;

    /// Attaches `handle` to texture unit `slot`
    fn bind(&mut self, slot: usize, handle: TextureHandle);

    fn release(&mut self, handle: TextureHandle);
}

/// [`ImageDecoder`] backed by the `image` crate.
///
/// Images are flipped vertically so that row 0 is the bottom row, matching
/// texture coordinates with v pointing up.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileDecoder;

impl ImageDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let image = image::open(path)
            .map_err(|e| SceneError::ImageDecode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .flipv();

        let (width, height) = (image.width(), image.height());
        let channels = image.color().channel_count();

        let pixels = match channels {
            1 => image.into_luma8().into_raw(),
            2 => image.into_luma_alpha8().into_raw(),
            3 => image.into_rgb8().into_raw(),
            _ => image.into_rgba8().into_raw(),
        };

        Ok(DecodedImage {
            pixels,
            width,
            height,
            channels,
        })
    }
}

/// Tag to texture table with first-match lookup
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_TEXTURE_SLOTS
    }

    /// Fails when no slot is left for `tag`
    pub fn ensure_capacity(&self, tag: &str) -> Result<()> {
        if self.is_full() {
            return Err(SceneError::TextureCapacity {
                tag: tag.to_string(),
                capacity: MAX_TEXTURE_SLOTS,
            });
        }
        Ok(())
    }

    /// Appends a texture and returns its slot index
    pub fn register(&mut self, tag: &str, handle: TextureHandle) -> Result<usize> {
        self.ensure_capacity(tag)?;

        let slot = self.slots.len();
        self.slots.push(TextureSlot {
            tag: tag.to_string(),
            handle,
            slot,
        });
        Ok(slot)
    }

    /// Slot of the first texture registered under `tag`
    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.tag == tag)
    }

    /// Handle of the first texture registered under `tag`
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.slots.iter().find(|s| s.tag == tag).map(|s| s.handle)
    }

    pub fn slots(&self) -> &[TextureSlot] {
        &self.slots
    }

    /// Empties the table, returning the slots that were in it
    pub fn drain(&mut self) -> Vec<TextureSlot> {
        std::mem::take(&mut self.slots)
    }
}
