//! Editor session: owned state plus the operations the UI drives.
//!
//! One [`EditorSession`] holds everything that used to be free-floating UI
//! state: the loaded media, the mask, and the ephemeral drag anchor. The UI
//! layer forwards raw events (file bytes, pointer coordinates, wheel
//! direction, slider values) and reads back the overlay layout; an optional
//! listener fires after every committed mask change so the preview can
//! redraw. Single-threaded; every mutation runs to completion, last write
//! wins.

use crate::decode::{decode_gif, DecodeError, SourceMedia};
use crate::export::{export_gif, output_file_name, ExportError};
use crate::overlay::{overlay_layout, OverlayLayout};
use crate::pointer::{drag_move, wheel_zoom, DragSession};
use crate::MaskState;

/// A finished export: the suggested download name and the encoded bytes.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Download file name (`<stem>_edit.gif`)
    pub file_name: String,
    /// Encoded GIF bytes
    pub bytes: Vec<u8>,
}

type MaskListener = Box<dyn FnMut(&MaskState)>;

/// State and operations for one editor instance.
#[derive(Default)]
pub struct EditorSession {
    media: Option<SourceMedia>,
    mask: MaskState,
    drag: Option<DragSession>,
    mask_listener: Option<MaskListener>,
}

impl EditorSession {
    /// Create an empty session (no media loaded, default mask).
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded media, if any.
    pub fn media(&self) -> Option<&SourceMedia> {
        self.media.as_ref()
    }

    /// Current mask state.
    pub fn mask(&self) -> &MaskState {
        &self.mask
    }

    /// Whether media is loaded (drives the save button and all interaction).
    ///
    /// A rejected upload leaves the session untouched, so this stays true
    /// when a re-upload fails over previously loaded media; a UI that wants
    /// to disable save after a rejection has to track that itself.
    pub fn is_loaded(&self) -> bool {
        self.media.is_some()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Register the mask-changed listener, replacing any previous one.
    pub fn on_mask_changed(&mut self, listener: MaskListener) {
        self.mask_listener = Some(listener);
    }

    fn notify(&mut self) {
        if let Some(listener) = self.mask_listener.as_mut() {
            listener(&self.mask);
        }
    }

    /// Load an uploaded file, replacing the current media wholesale.
    ///
    /// On success the mask resets to defaults. On failure the session is left
    /// exactly as it was: previous media, previous mask.
    pub fn load(&mut self, bytes: &[u8], file_name: &str) -> Result<(), DecodeError> {
        let media = decode_gif(bytes, file_name)?;
        self.media = Some(media);
        self.mask = MaskState::default();
        self.drag = None;
        self.notify();
        Ok(())
    }

    /// Restore the default mask. No-op while nothing is loaded.
    pub fn reset(&mut self) {
        if !self.is_loaded() {
            return;
        }
        self.mask = MaskState::default();
        self.notify();
    }

    /// Overwrite the whole mask at once (percents clamped).
    ///
    /// The wasm bindings drive the per-field setters below instead, one per
    /// control; this is for callers that assemble a full state, such as a
    /// saved preset.
    pub fn set_mask(&mut self, mut mask: MaskState) {
        mask.size_percent = mask.size_percent.min(100);
        mask.x_percent = mask.x_percent.min(100);
        mask.y_percent = mask.y_percent.min(100);
        self.mask = mask;
        self.notify();
    }

    /// Slider write: circle size.
    pub fn set_size_percent(&mut self, value: u32) {
        self.mask.set_size_percent(value);
        self.notify();
    }

    /// Slider write: center X.
    pub fn set_x_percent(&mut self, value: u32) {
        self.mask.set_x_percent(value);
        self.notify();
    }

    /// Slider write: center Y.
    pub fn set_y_percent(&mut self, value: u32) {
        self.mask.set_y_percent(value);
        self.notify();
    }

    /// Slider write: border thickness.
    pub fn set_border_width(&mut self, value: u32) {
        self.mask.border_width = value;
        self.notify();
    }

    /// Color picker write: border color from `#rrggbb`.
    pub fn set_border_color(&mut self, css: &str) -> bool {
        let ok = self.mask.set_border_color_css(css);
        if ok {
            self.notify();
        }
        ok
    }

    /// Pointer down inside the preview: open a drag session.
    ///
    /// Ignored while nothing is loaded.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !self.is_loaded() {
            return;
        }
        self.drag = Some(DragSession::new(x, y));
    }

    /// Pointer move: apply the delta since the anchor and advance the anchor.
    ///
    /// Returns true when the mask changed. Ignored while no drag is open.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let Some(media) = self.media.as_ref() else {
            return false;
        };
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };

        let (dx, dy) = drag.delta_to(x, y);
        drag.advance(x, y);

        let moved = drag_move(&self.mask, media.width, media.height, dx, dy);
        if moved == self.mask {
            return false;
        }
        self.mask = moved;
        self.notify();
        true
    }

    /// Pointer up anywhere in the document: close the drag session.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Wheel event inside the preview.
    ///
    /// `scroll_up` is true for negative deltaY (shrink). Returns true when
    /// the mask changed; a size already pinned at its limit is a no-op.
    pub fn wheel(&mut self, cursor_x: f64, cursor_y: f64, scroll_up: bool) -> bool {
        let Some(media) = self.media.as_ref() else {
            return false;
        };
        let zoomed = wheel_zoom(
            &self.mask,
            media.width,
            media.height,
            cursor_x,
            cursor_y,
            scroll_up,
        );
        match zoomed {
            Some(zoomed) => {
                self.mask = zoomed;
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Overlay layout for the current state; `None` while nothing is loaded.
    pub fn overlay(&self) -> Option<OverlayLayout> {
        let media = self.media.as_ref()?;
        Some(overlay_layout(media.width, media.height, &self.mask))
    }

    /// Export the loaded media cropped to the current mask.
    pub fn export(&self) -> Result<ExportArtifact, ExportError> {
        let media = self.media.as_ref().ok_or(ExportError::NoMedia)?;
        let bytes = export_gif(media, &self.mask)?;
        Ok(ExportArtifact {
            file_name: output_file_name(&media.file_stem),
            bytes,
        })
    }
}
