//! GIF encoding for export.
//!
//! Rendered full-canvas RGBA frames are quantized (NeuQuant via
//! `gif::Frame::from_rgba_speed`) and written as one looping GIF. Fully
//! transparent pixels map to the transparent palette index, and frames use
//! background disposal so per-frame transparency survives playback.

use image::RgbaImage;
use thiserror::Error;

/// Errors that can occur during GIF encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// GIF canvases are limited to 16-bit dimensions
    #[error("Dimensions too large for GIF: {width}x{height} (max 65535)")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// A frame's raster does not match the canvas dimensions
    #[error("Frame raster is {actual_w}x{actual_h}, expected {expected_w}x{expected_h}")]
    FrameSizeMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    /// There is nothing to encode
    #[error("No frames to encode")]
    NoFrames,

    /// The underlying GIF writer failed
    #[error("GIF encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<gif::EncodingError> for EncodeError {
    fn from(e: gif::EncodingError) -> Self {
        EncodeError::EncodingFailed(e.to_string())
    }
}

/// One frame ready for encoding: a full-canvas raster plus its display delay.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Full-canvas RGBA raster (canvas width x canvas height)
    pub pixels: RgbaImage,
    /// Display delay in milliseconds
    pub delay_ms: u32,
}

/// Encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// NeuQuant quantization speed (1 = best quality, 30 = fastest)
    pub quality: u8,
    /// Loop the animation forever
    pub loop_forever: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quality: 10,
            loop_forever: true,
        }
    }
}

/// Encode rendered frames into a complete GIF byte stream.
///
/// # Arguments
///
/// * `width`, `height` - Canvas dimensions; every frame raster must match
/// * `frames` - Frames in display order
/// * `config` - Quantization speed and looping
pub fn encode_gif(
    width: u32,
    height: u32,
    frames: &[RenderedFrame],
    config: &EncoderConfig,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(EncodeError::DimensionsTooLarge { width, height });
    }
    if frames.is_empty() {
        return Err(EncodeError::NoFrames);
    }

    let mut out = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut out, width as u16, height as u16, &[])?;
        if config.loop_forever {
            encoder.set_repeat(gif::Repeat::Infinite)?;
        }

        let speed = i32::from(config.quality.clamp(1, 30));
        for frame in frames {
            let (fw, fh) = frame.pixels.dimensions();
            if (fw, fh) != (width, height) {
                return Err(EncodeError::FrameSizeMismatch {
                    expected_w: width,
                    expected_h: height,
                    actual_w: fw,
                    actual_h: fh,
                });
            }

            // from_rgba_speed quantizes and routes zero-alpha pixels to the
            // transparent index; it mutates its input, so clone the raster.
            let mut rgba = frame.pixels.as_raw().clone();
            let mut gif_frame =
                gif::Frame::from_rgba_speed(width as u16, height as u16, &mut rgba, speed);
            gif_frame.delay = (frame.delay_ms / 10) as u16;
            gif_frame.dispose = gif::DisposalMethod::Background;
            encoder.write_frame(&gif_frame)?;
        }
    }

    log::debug!(
        "encoded {} frames into {} bytes ({}x{})",
        frames.len(),
        out.len(),
        width,
        height
    );

    Ok(out)
}

/// Test helpers for building exact, quantization-free GIF streams.
#[cfg(test)]
pub mod test_support {
    use std::borrow::Cow;

    /// Build a GIF where each frame is a solid color from an exact one-entry
    /// palette. Decoding it yields those colors byte-for-byte, so pixel
    /// assertions do not depend on quantization.
    pub fn solid_gif(width: u16, height: u16, colors: &[[u8; 3]], delay: u16) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut out, width, height, &[]).unwrap();
            for color in colors {
                let frame = gif::Frame {
                    width,
                    height,
                    buffer: Cow::Owned(vec![0u8; width as usize * height as usize]),
                    palette: Some(color.to_vec()),
                    delay,
                    ..gif::Frame::default()
                };
                encoder.write_frame(&frame).unwrap();
            }
        }
        out
    }
}
