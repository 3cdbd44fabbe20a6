//! Full-resolution export pipeline.
//!
//! Replays the crop geometry once at native resolution against every decoded
//! frame: each frame's patch is composited onto a transparent full-size
//! canvas, clipped to the crop circle, the ring border is stroked on top, and
//! the results are fed to the GIF encoder.
//!
//! The circle is computed once per export, never per frame, so the geometry
//! is pixel-consistent across the whole animation. The preview recomputes it
//! continuously; that asymmetry is intentional.

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::decode::{Frame, SourceMedia};
use crate::encode::{encode_gif, EncodeError, EncoderConfig, RenderedFrame};
use crate::geometry::{circle_for, Circle};
use crate::MaskState;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was triggered with no animation loaded.
    #[error("Upload a GIF before saving")]
    NoMedia,

    /// The encoder rejected the rendered frames.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Name for the exported file: `<stem>_edit.gif`.
pub fn output_file_name(stem: &str) -> String {
    format!("{stem}_edit.gif")
}

/// Rasterize one frame: transparent canvas, patch composited under the circle
/// clip, then the ring border.
fn rasterize_frame(
    media: &SourceMedia,
    frame: &Frame,
    circle: &Circle,
    mask: &MaskState,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(media.width, media.height);

    composite_clipped(&mut canvas, frame, circle);

    if mask.border_width > 0 {
        stroke_ring(&mut canvas, circle, mask.border_width, mask.border_color);
    }

    canvas
}

/// Composite a frame patch at its declared offset, keeping only pixels whose
/// centers fall inside the circle.
fn composite_clipped(canvas: &mut RgbaImage, frame: &Frame, circle: &Circle) {
    let (canvas_w, canvas_h) = canvas.dimensions();

    for py in 0..frame.height {
        let dy = frame.top + py;
        if dy >= canvas_h {
            break;
        }
        for px in 0..frame.width {
            let dx = frame.left + px;
            if dx >= canvas_w {
                break;
            }
            if !circle.contains(dx as f64 + 0.5, dy as f64 + 0.5) {
                continue;
            }
            let idx = ((py * frame.width + px) * 4) as usize;
            let pixel = &frame.patch[idx..idx + 4];
            // Source-over onto a fresh transparent canvas is a plain copy;
            // transparent patch pixels stay transparent.
            if pixel[3] > 0 {
                canvas.put_pixel(dx, dy, Rgba([pixel[0], pixel[1], pixel[2], pixel[3]]));
            }
        }
    }
}

/// Stroke the ring border.
///
/// The stroke is centered on `radius - border_width / 2`, so it spans the
/// annulus `[radius - border_width, radius]` and extends inward from the
/// nominal boundary.
fn stroke_ring(canvas: &mut RgbaImage, circle: &Circle, border_width: u32, color: [u8; 3]) {
    let outer = circle.radius;
    let inner = (circle.radius - border_width as f64).max(0.0);
    if outer <= 0.0 {
        return;
    }

    let (canvas_w, canvas_h) = canvas.dimensions();
    let x_min = ((circle.center_x - outer).floor().max(0.0)) as u32;
    let y_min = ((circle.center_y - outer).floor().max(0.0)) as u32;
    let x_max = ((circle.center_x + outer).ceil() as u32).min(canvas_w);
    let y_max = ((circle.center_y + outer).ceil() as u32).min(canvas_h);

    for y in y_min..y_max {
        for x in x_min..x_max {
            let dist = circle.distance_from_center(x as f64 + 0.5, y as f64 + 0.5);
            if dist >= inner && dist <= outer {
                canvas.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
            }
        }
    }
}

/// Render every frame of the media under the current mask.
///
/// The geometry model is evaluated exactly once, up front.
pub fn render_frames(media: &SourceMedia, mask: &MaskState) -> Vec<RenderedFrame> {
    let circle = circle_for(media.width, media.height, mask);

    media
        .frames
        .iter()
        .map(|frame| RenderedFrame {
            pixels: rasterize_frame(media, frame, &circle, mask),
            delay_ms: frame.delay_ms,
        })
        .collect()
}

/// Export the media cropped to the current mask as a GIF byte stream.
pub fn export_gif(media: &SourceMedia, mask: &MaskState) -> Result<Vec<u8>, ExportError> {
    let frames = render_frames(media, mask);
    let bytes = encode_gif(media.width, media.height, &frames, &EncoderConfig::default())?;
    log::debug!(
        "exported {} frames as {} bytes",
        frames.len(),
        bytes.len()
    );
    Ok(bytes)
}
