//! Error types
//!
//! Every failure the scene core can produce is non-fatal: the caller logs it and
//! keeps rendering without the missing resource. [`SceneError`] names those
//! failures so they can be reported precisely.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while preparing or rendering the scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The image file could not be read or decoded.
    #[error("could not load image {path}: {reason}")]
    ImageDecode { path: PathBuf, reason: String },

    /// The image decoded fine but has a channel layout the texture path does not handle.
    #[error("not implemented to handle image {path} with {channels} channels")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    /// The image is wider or taller than the device can hold in one texture.
    #[error("image {path} is {width}x{height}, larger than the {limit} texel limit")]
    TextureTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        limit: u32,
    },

    /// Every texture slot is already in use.
    #[error("cannot register texture '{tag}': all {capacity} texture slots are in use")]
    TextureCapacity { tag: String, capacity: usize },

    /// The GPU adapter, device or surface could not be created.
    #[error("GPU initialisation failed: {0}")]
    GpuInit(String),
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;
