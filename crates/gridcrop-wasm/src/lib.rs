//! GridCrop WASM - WebAssembly bindings for GridCrop
//!
//! This crate provides WASM bindings to expose the gridcrop-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images, grid lines and cells
//! - `decode` - Image decoding bindings (PNG, JPEG)
//! - `detect` - Grid line detection
//! - `cell` - Click-to-cell resolution and pixel extraction
//! - `export` - Crop list, PNG encoding and zip export
//! - `logger` - Console backend for the core's `log` output
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, detect_grid_lines, resolve_cell } from '@gridcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const lines = detect_grid_lines(image);
//! const rect = resolve_cell(lines, 120.5, 48);
//! ```

use wasm_bindgen::prelude::*;

mod cell;
mod decode;
mod detect;
mod export;
mod logger;
mod types;

// Re-export public types
pub use cell::{extract_cell, resolve_cell};
pub use decode::decode_image;
pub use detect::detect_grid_lines;
pub use export::{encode_png, export_crops, filename_preview, JsCropList, JsExportedFile};
pub use types::{JsCellRect, JsGridLines, JsRasterImage};

/// Initialize the WASM module (called automatically on load)
///
/// Installs a `log` backend so diagnostics from gridcrop-core appear in the
/// browser console.
#[wasm_bindgen(start)]
pub fn init() {
    logger::init();
    log::debug!("gridcrop-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
