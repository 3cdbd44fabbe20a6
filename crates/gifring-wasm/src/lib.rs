//! Gifring WASM - WebAssembly bindings for the circular GIF crop editor
//!
//! This crate exposes the gifring-core editor session to JavaScript. The JS
//! side owns the DOM: it forwards file bytes, pointer coordinates, wheel
//! direction, and slider values, then applies the returned overlay layout to
//! the preview element and triggers the download for exported bytes.
//!
//! # Usage
//!
//! ```typescript
//! import init, { GifEditor } from '@gifring/wasm';
//!
//! await init();
//! const editor = new GifEditor();
//! editor.load(new Uint8Array(await file.arrayBuffer()), file.name);
//! Object.assign(overlayEl.style, cssFromLayout(editor.overlay()));
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod logger;

pub use editor::GifEditor;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init_console_logger();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Box-shadow value for the inverse mask outside the circular aperture.
#[wasm_bindgen]
pub fn inverse_mask_shadow() -> String {
    gifring_core::overlay::INVERSE_MASK_SHADOW.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_inverse_mask_shadow() {
        assert!(inverse_mask_shadow().contains("9999px"));
    }
}
