//! Screen overlay layout for the live preview.
//!
//! The preview is a DOM box positioned over the animated image: a circular
//! aperture with an optional ring border and a huge box-shadow acting as an
//! inverse mask. This module only computes the layout; applying it to the
//! DOM (and echoing the numeric labels) is the UI layer's job. Purely
//! presentational, not pixel-exact, and idempotent for unchanged mask state.

use serde::Serialize;

use crate::geometry::circle_for;
use crate::MaskState;

/// Box-shadow that blacks out everything outside the circular aperture.
pub const INVERSE_MASK_SHADOW: &str = "0 0 0 9999px rgba(0, 0, 0, 1)";

/// Computed overlay geometry in preview pixels.
///
/// Serialize-only: it crosses the WASM boundary outbound and is never read
/// back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayout {
    /// Left edge of the aperture box (center minus radius)
    pub left: f64,
    /// Top edge of the aperture box
    pub top: f64,
    /// Aperture box width and height
    pub diameter: f64,
    /// Ring border thickness in pixels
    pub border_width: u32,
    /// Ring border color as a CSS hex string
    pub border_color: String,
}

/// Project the mask state onto the screen overlay.
pub fn overlay_layout(width: u32, height: u32, mask: &MaskState) -> OverlayLayout {
    let circle = circle_for(width, height, mask);
    OverlayLayout {
        left: circle.center_x - circle.radius,
        top: circle.center_y - circle.radius,
        diameter: circle.diameter(),
        border_width: mask.border_width,
        border_color: mask.border_color_css(),
    }
}
