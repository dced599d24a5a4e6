//! WASM-compatible wrapper types for images, grid lines and cells.
//!
//! These types wrap the core GridCrop types and handle the conversion between
//! Rust and JavaScript data representations.

use gridcrop_core::{CellRect, GridLines, RasterImage};
use wasm_bindgen::prelude::*;

/// An RGBA raster wrapper for JavaScript.
///
/// The pixel layout matches `ImageData.data`, so a canvas can be read with
/// `getImageData` and handed over directly, and a crop can be drawn back with
/// `new ImageData(new Uint8ClampedArray(img.pixels()), img.width)`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a JsRasterImage from dimensions and RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels.length !== width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterImage, JsValue> {
        RasterImage::from_rgba(width, height, pixels)
            .map(Self::from_raster)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &RasterImage {
        &self.inner
    }
}

/// Grid lines detected for one image.
///
/// Keep this object for as long as the image is shown and pass it to
/// `resolve_cell` for every click. Loading a new image means detecting again
/// and dropping the old object.
#[wasm_bindgen]
pub struct JsGridLines {
    inner: GridLines,
}

#[wasm_bindgen]
impl JsGridLines {
    /// Build grid lines from plain coordinate arrays (any order).
    #[wasm_bindgen(constructor)]
    pub fn new(xs: Vec<i32>, ys: Vec<i32>) -> JsGridLines {
        Self::from_lines(GridLines::new(xs, ys))
    }

    /// x-positions of vertical lines, ascending, as Int32Array
    #[wasm_bindgen(getter)]
    pub fn xs(&self) -> Vec<i32> {
        self.inner.xs.as_slice().to_vec()
    }

    /// y-positions of horizontal lines, ascending, as Int32Array
    #[wasm_bindgen(getter)]
    pub fn ys(&self) -> Vec<i32> {
        self.inner.ys.as_slice().to_vec()
    }

    /// Number of fully bounded cells
    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> usize {
        self.inner.cell_count()
    }
}

impl JsGridLines {
    pub(crate) fn from_lines(inner: GridLines) -> Self {
        Self { inner }
    }

    pub(crate) fn lines(&self) -> &GridLines {
        &self.inner
    }
}

/// A resolved cell rectangle in image pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsCellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[wasm_bindgen]
impl JsCellRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> JsCellRect {
        JsCellRect {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<CellRect> for JsCellRect {
    fn from(rect: CellRect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<JsCellRect> for CellRect {
    fn from(rect: JsCellRect) -> Self {
        CellRect::new(rect.x, rect.y, rect.width, rect.height)
    }
}
