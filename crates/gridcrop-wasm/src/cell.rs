//! Cell resolution and extraction WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { resolve_cell, extract_cell } from '@gridcrop/wasm';
//!
//! canvas.addEventListener('click', (event) => {
//!   const rect = resolve_cell(lines, event.offsetX, event.offsetY);
//!   if (rect === undefined) return; // outside the grid
//!   const cell = extract_cell(image, rect);
//!   crops.push(cell);
//! });
//! ```

use crate::types::{JsCellRect, JsGridLines, JsRasterImage};
use gridcrop_core::{crop, resolve, CellRect, Point};
use wasm_bindgen::prelude::*;

/// Find the cell containing the point `(x, y)`.
///
/// Returns `undefined` when the point is left of the first line, right of
/// the last line, or otherwise not enclosed on both axes.
#[wasm_bindgen]
pub fn resolve_cell(lines: &JsGridLines, x: f64, y: f64) -> Option<JsCellRect> {
    resolve::resolve_cell(lines.lines(), Point::new(x, y)).map(JsCellRect::from)
}

/// Copy the pixels of `rect` into a new image.
///
/// Parts of the rectangle outside the image come back transparent. Returns
/// `undefined` for a rectangle with no area.
#[wasm_bindgen]
pub fn extract_cell(image: &JsRasterImage, rect: &JsCellRect) -> Option<JsRasterImage> {
    crop::extract_cell(image.raster(), CellRect::from(*rect)).map(JsRasterImage::from_raster)
}
