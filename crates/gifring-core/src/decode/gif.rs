//! GIF decoding via the `gif` crate.
//!
//! Frames are decoded to RGBA patches exactly as the stream declares them:
//! each frame keeps its own sub-rectangle and offsets rather than being
//! composited onto the canvas here. The export pipeline does the compositing
//! so the crop geometry is applied in one place.

use std::io::Cursor;

use super::types::{file_stem, DecodeError, Frame, SourceMedia, DEFAULT_FRAME_DELAY_MS};

const GIF87A: &[u8; 6] = b"GIF87a";
const GIF89A: &[u8; 6] = b"GIF89a";

/// Check whether a byte buffer starts with a GIF signature.
pub fn is_gif(bytes: &[u8]) -> bool {
    bytes.len() >= 6 && (&bytes[..6] == GIF87A || &bytes[..6] == GIF89A)
}

/// Decode a GIF byte stream into [`SourceMedia`].
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the uploaded file
/// * `file_name` - Original file name; only its stem is kept, for naming the
///   export artifact
///
/// # Errors
///
/// * [`DecodeError::InvalidFormat`] when the signature is not a GIF
/// * [`DecodeError::CorruptedFile`] when the stream fails mid-decode
/// * [`DecodeError::NoFrames`] when the stream holds no image data
pub fn decode_gif(bytes: &[u8], file_name: &str) -> Result<SourceMedia, DecodeError> {
    if !is_gif(bytes) {
        log::warn!("rejected upload {:?}: not a GIF signature", file_name);
        return Err(DecodeError::InvalidFormat);
    }

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options
        .read_info(Cursor::new(bytes))
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let width = decoder.width() as u32;
    let height = decoder.height() as u32;

    let mut frames = Vec::new();
    loop {
        match decoder.read_next_frame() {
            Ok(Some(frame)) => {
                let delay_ms = frame.delay as u32 * 10;
                frames.push(Frame {
                    patch: frame.buffer.to_vec(),
                    width: frame.width as u32,
                    height: frame.height as u32,
                    left: frame.left as u32,
                    top: frame.top as u32,
                    delay_ms: if delay_ms == 0 {
                        DEFAULT_FRAME_DELAY_MS
                    } else {
                        delay_ms
                    },
                });
            }
            Ok(None) => break,
            Err(e) => return Err(DecodeError::CorruptedFile(e.to_string())),
        }
    }

    if frames.is_empty() {
        return Err(DecodeError::NoFrames);
    }

    log::debug!(
        "decoded {:?}: {}x{}, {} frames",
        file_name,
        width,
        height,
        frames.len()
    );

    Ok(SourceMedia {
        width,
        height,
        frames,
        file_stem: file_stem(file_name).to_string(),
    })
}
