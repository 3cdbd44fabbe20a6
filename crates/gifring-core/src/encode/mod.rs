//! GIF encoding pipeline for gifring.
//!
//! This module provides functionality for:
//! - Encoding full-canvas RGBA frames into a looping GIF with configurable
//!   quantization speed
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be driven from a browser via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.

mod gif;

#[cfg(test)]
pub use gif::test_support;
pub use gif::{encode_gif, EncodeError, EncoderConfig, RenderedFrame};
