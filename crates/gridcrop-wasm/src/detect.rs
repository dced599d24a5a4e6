//! Grid line detection WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { detect_grid_lines } from '@gridcrop/wasm';
//!
//! // Defaults: 80% coverage on both axes
//! const lines = detect_grid_lines(image);
//!
//! // Looser search for faint scans
//! const loose = detect_grid_lines(image, { verticalCoverage: 0.6, horizontalCoverage: 0.6 });
//! console.log(lines.xs, lines.ys);
//! ```

use crate::types::{JsGridLines, JsRasterImage};
use gridcrop_core::detect::{self, DetectOptions};
use wasm_bindgen::prelude::*;

/// Parse a JS options object; `undefined` and `null` mean defaults and
/// missing fields take their default values.
pub(crate) fn parse_options(options: JsValue) -> Result<DetectOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(DetectOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid detect options: {}", e)))
}

/// Detect the vertical and horizontal lines of a grid image.
///
/// Run this once per loaded image and keep the result for click handling.
/// An image without a detectable grid yields empty coordinate lists, never
/// an error.
///
/// # Arguments
///
/// * `image` - The decoded image
/// * `options` - Optional `{ verticalCoverage, horizontalCoverage, rhoStep, thetaStep }`
///
/// # Errors
///
/// Returns an error only if `options` is not a valid options object.
#[wasm_bindgen]
pub fn detect_grid_lines(image: &JsRasterImage, options: JsValue) -> Result<JsGridLines, JsValue> {
    let options = parse_options(options)?;
    let lines = detect::detect_grid_lines(image.raster(), &options);

    log::debug!(
        "detect_grid_lines: {} vertical, {} horizontal lines with {:?}",
        lines.xs.len(),
        lines.ys.len(),
        options
    );

    Ok(JsGridLines::from_lines(lines))
}
