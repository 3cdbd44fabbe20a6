//! GIF decoding pipeline for gifring.
//!
//! This module turns uploaded GIF bytes into an immutable [`SourceMedia`]:
//! canvas dimensions plus an ordered list of RGBA frame patches with their
//! offsets and delays. Frames that only encode the changed region are kept
//! that way; compositing happens in the export pipeline.
//!
//! # Architecture
//!
//! The pipeline is designed to be driven from a browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.

mod gif;
mod types;

pub use gif::{decode_gif, is_gif};
pub use types::{file_stem, DecodeError, Frame, SourceMedia, DEFAULT_FRAME_DELAY_MS};
