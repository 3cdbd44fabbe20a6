//! Core types for GIF decoding.

use thiserror::Error;

/// Fallback display delay when a frame carries none (milliseconds).
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Error types for GIF decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file is not a GIF.
    #[error("Only GIF files are supported")]
    InvalidFormat,

    /// The GIF stream is corrupted or incomplete.
    #[error("Corrupted or incomplete GIF file: {0}")]
    CorruptedFile(String),

    /// The GIF contains no frames.
    #[error("GIF contains no frames")]
    NoFrames,
}

/// One decoded animation frame.
///
/// A frame only covers its declared sub-rectangle of the full canvas; the
/// patch is RGBA at `width * height * 4` bytes and is composited at
/// (`left`, `top`) during export. Frames are owned by [`SourceMedia`] and
/// read-only to all consumers.
#[derive(Debug, Clone)]
pub struct Frame {
    /// RGBA patch bytes in row-major order (4 bytes per pixel)
    pub patch: Vec<u8>,
    /// Patch width in pixels
    pub width: u32,
    /// Patch height in pixels
    pub height: u32,
    /// Horizontal offset of the patch within the canvas
    pub left: u32,
    /// Vertical offset of the patch within the canvas
    pub top: u32,
    /// Display delay in milliseconds (defaulted when the stream says zero)
    pub delay_ms: u32,
}

impl Frame {
    /// Expected patch length in bytes.
    pub fn byte_size(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// A fully decoded animated image.
///
/// Immutable once built; a new upload replaces the whole value.
#[derive(Debug, Clone)]
pub struct SourceMedia {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Animation frames in display order
    pub frames: Vec<Frame>,
    /// Original file name without its extension, for naming the export
    pub file_stem: String,
}

impl SourceMedia {
    /// Number of frames in the animation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Strip the final extension from an uploaded file name.
///
/// `party.gif` becomes `party`; a name without a dot is returned unchanged.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
