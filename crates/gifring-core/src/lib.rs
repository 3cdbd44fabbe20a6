//! Gifring Core - Circular GIF crop editor
//!
//! This crate provides the core logic for the gifring editor: the crop-circle
//! geometry model, pointer interaction (drag-to-move, wheel-to-zoom), the
//! preview overlay layout, GIF decoding/encoding, and the frame-by-frame
//! export pipeline.

pub mod decode;
pub mod encode;
pub mod export;
pub mod geometry;
pub mod overlay;
pub mod pointer;
pub mod session;

pub use export::{export_gif, output_file_name, ExportError};
pub use geometry::{circle_for, Circle};
pub use overlay::{overlay_layout, OverlayLayout};
pub use session::{EditorSession, ExportArtifact};

/// Default ring border color (`#9F9FDF`).
pub const DEFAULT_BORDER_COLOR: [u8; 3] = [0x9f, 0x9f, 0xdf];

/// Normalized description of the crop circle plus border styling.
///
/// All percentages are stored as integers in 0-100, matching the integer
/// slider controls. Converting pointer coordinates back to percentages rounds
/// to the nearest integer; this precision reduction is deliberate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MaskState {
    /// Circle diameter as a percentage of min(width, height) (0 to 100)
    pub size_percent: u32,
    /// Circle center X as a percentage of the media width (0 to 100)
    pub x_percent: u32,
    /// Circle center Y as a percentage of the media height (0 to 100)
    pub y_percent: u32,
    /// Ring border thickness in pixels (0 = no border)
    pub border_width: u32,
    /// Ring border color as RGB
    pub border_color: [u8; 3],
}

impl Default for MaskState {
    fn default() -> Self {
        Self {
            size_percent: 100,
            x_percent: 50,
            y_percent: 50,
            border_width: 0,
            border_color: DEFAULT_BORDER_COLOR,
        }
    }
}

impl MaskState {
    /// Create a new MaskState with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Set the size percentage, clamped to 0-100.
    pub fn set_size_percent(&mut self, value: u32) {
        self.size_percent = value.min(100);
    }

    /// Set the center X percentage, clamped to 0-100.
    pub fn set_x_percent(&mut self, value: u32) {
        self.x_percent = value.min(100);
    }

    /// Set the center Y percentage, clamped to 0-100.
    pub fn set_y_percent(&mut self, value: u32) {
        self.y_percent = value.min(100);
    }

    /// Border color as a lowercase CSS hex string (e.g. `#9f9fdf`).
    pub fn border_color_css(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.border_color[0], self.border_color[1], self.border_color[2]
        )
    }

    /// Parse a `#rrggbb` CSS hex string into the border color.
    ///
    /// Returns false and leaves the color unchanged if the string is not a
    /// well-formed hex color.
    pub fn set_border_color_css(&mut self, css: &str) -> bool {
        let hex = match css.strip_prefix('#') {
            Some(h) if h.len() == 6 => h,
            _ => return false,
        };
        let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match (parse(0..2), parse(2..4), parse(4..6)) {
            (Some(r), Some(g), Some(b)) => {
                self.border_color = [r, g, b];
                true
            }
            _ => false,
        }
    }
}
