//! The editor session binding.
//!
//! One `GifEditor` wraps one `gifring_core::EditorSession`. Errors cross the
//! boundary as `JsError`, whose message is what the UI shows in its alert.

use gifring_core::EditorSession;
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

/// A circular-crop GIF editor session.
///
/// # Memory Management
///
/// The decoded frames live in WASM memory for the lifetime of this object.
/// `free()` releases them immediately; otherwise wasm-bindgen's finalizer
/// handles cleanup.
#[wasm_bindgen]
pub struct GifEditor {
    session: EditorSession,
}

impl Default for GifEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GifEditor {
    /// Create an empty editor (no media loaded, default mask).
    #[wasm_bindgen(constructor)]
    pub fn new() -> GifEditor {
        GifEditor {
            session: EditorSession::new(),
        }
    }

    /// Load an uploaded file.
    ///
    /// On failure the previous media and mask are untouched and the error
    /// message is suitable for the upload alert.
    pub fn load(&mut self, bytes: &[u8], file_name: &str) -> Result<(), JsError> {
        self.session
            .load(bytes, file_name)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Whether media is loaded; drives the save button and the empty state.
    ///
    /// A rejected re-upload keeps the previous media, so this stays true;
    /// the JS layer disables save itself when it wants a rejection to do
    /// that.
    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    /// Media width in pixels (0 while nothing is loaded).
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.session.media().map_or(0, |m| m.width)
    }

    /// Media height in pixels (0 while nothing is loaded).
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.session.media().map_or(0, |m| m.height)
    }

    /// Number of frames in the loaded animation.
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> usize {
        self.session.media().map_or(0, |m| m.frame_count())
    }

    /// Restore the default mask (reset button).
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Slider write: circle size percentage.
    pub fn set_size_percent(&mut self, value: u32) {
        self.session.set_size_percent(value);
    }

    /// Slider write: center X percentage.
    pub fn set_x_percent(&mut self, value: u32) {
        self.session.set_x_percent(value);
    }

    /// Slider write: center Y percentage.
    pub fn set_y_percent(&mut self, value: u32) {
        self.session.set_y_percent(value);
    }

    /// Slider write: border thickness in pixels.
    pub fn set_border_width(&mut self, value: u32) {
        self.session.set_border_width(value);
    }

    /// Color picker write: `#rrggbb`. Returns false for malformed input.
    pub fn set_border_color(&mut self, css: &str) -> bool {
        self.session.set_border_color(css)
    }

    /// Current slider values, for echoing into the numeric labels.
    #[wasm_bindgen(getter)]
    pub fn size_percent(&self) -> u32 {
        self.session.mask().size_percent
    }

    #[wasm_bindgen(getter)]
    pub fn x_percent(&self) -> u32 {
        self.session.mask().x_percent
    }

    #[wasm_bindgen(getter)]
    pub fn y_percent(&self) -> u32 {
        self.session.mask().y_percent
    }

    #[wasm_bindgen(getter)]
    pub fn border_width(&self) -> u32 {
        self.session.mask().border_width
    }

    #[wasm_bindgen(getter)]
    pub fn border_color(&self) -> String {
        self.session.mask().border_color_css()
    }

    /// Pointer down inside the preview (coordinates relative to it).
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.session.pointer_down(x, y);
    }

    /// Pointer move; returns true when the preview needs a redraw.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(x, y)
    }

    /// Pointer up anywhere in the document.
    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    /// Whether a drag is in progress (for the grabbing cursor).
    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Wheel event inside the preview; `delta_y` is the raw event delta.
    /// Returns true when the preview needs a redraw.
    pub fn wheel(&mut self, cursor_x: f64, cursor_y: f64, delta_y: f64) -> bool {
        self.session.wheel(cursor_x, cursor_y, delta_y < 0.0)
    }

    /// Overlay layout as `{ left, top, diameter, border_width, border_color }`,
    /// or `undefined` while nothing is loaded.
    pub fn overlay(&self) -> Result<JsValue, JsError> {
        match self.session.overlay() {
            Some(layout) => {
                serde_wasm_bindgen::to_value(&layout).map_err(|e| JsError::new(&e.to_string()))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Export the cropped animation as GIF bytes.
    pub fn export(&self) -> Result<Uint8Array, JsError> {
        let artifact = self
            .session
            .export()
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Uint8Array::from(artifact.bytes.as_slice()))
    }

    /// Suggested download name for the export (`<stem>_edit.gif`).
    pub fn export_file_name(&self) -> Option<String> {
        self.session
            .media()
            .map(|m| gifring_core::output_file_name(&m.file_stem))
    }

    /// Explicitly free WASM memory held by the decoded frames.
    pub fn free_media(self) {
        // Dropping self releases the memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // GifEditor wraps EditorSession without extra logic; the session itself
    // is covered in gifring-core. These tests only exercise the paths that
    // do not touch the JS runtime.

    #[test]
    fn test_editor_starts_empty() {
        let editor = GifEditor::new();
        assert!(!editor.is_loaded());
        assert_eq!(editor.width(), 0);
        assert_eq!(editor.height(), 0);
        assert_eq!(editor.frame_count(), 0);
        assert!(editor.export_file_name().is_none());
    }

    #[test]
    fn test_editor_slider_echo() {
        let mut editor = GifEditor::new();
        editor.set_size_percent(40);
        editor.set_border_width(2);
        assert_eq!(editor.size_percent(), 40);
        assert_eq!(editor.border_width(), 2);
        assert_eq!(editor.border_color(), "#9f9fdf");
    }

    #[test]
    fn test_editor_wheel_direction_mapping() {
        let mut editor = GifEditor::new();
        // No media: both directions are no-ops
        assert!(!editor.wheel(10.0, 10.0, -120.0));
        assert!(!editor.wheel(10.0, 10.0, 120.0));
    }
}
