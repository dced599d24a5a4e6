//! Crop collection and export WASM bindings.
//!
//! Collected cells live in a [`JsCropList`] so they can be exported without
//! handing ownership of each image back and forth across the boundary.
//!
//! # Example
//!
//! ```typescript
//! import { JsCropList, export_crops, filename_preview } from '@gridcrop/wasm';
//!
//! const crops = new JsCropList();
//! crops.push(extract_cell(image, rect));
//!
//! const scheme = { prefix: 'scan', start: 1, digits: 3 };
//! hint.textContent = filename_preview(scheme, crops.length) ?? '';
//!
//! const file = export_crops(crops, scheme);
//! if (file) {
//!   const blob = new Blob([file.bytes()], { type: file.mime_type });
//!   download(blob, file.name);
//! }
//! ```

use crate::types::JsRasterImage;
use gridcrop_core::encode;
use gridcrop_core::export::{self, ExportedFile, NamingScheme};
use gridcrop_core::RasterImage;
use wasm_bindgen::prelude::*;

/// Parse a JS naming scheme object; `undefined` and `null` mean defaults.
pub(crate) fn parse_scheme(scheme: JsValue) -> Result<NamingScheme, JsValue> {
    if scheme.is_undefined() || scheme.is_null() {
        return Ok(NamingScheme::default());
    }
    serde_wasm_bindgen::from_value(scheme)
        .map_err(|e| JsValue::from_str(&format!("Invalid naming scheme: {}", e)))
}

/// Encode an image as PNG bytes.
///
/// # Errors
///
/// Returns an error if the image has a zero dimension or encoding fails.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png_image(image.raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Ordered list of collected cell images.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsCropList {
    images: Vec<RasterImage>,
}

#[wasm_bindgen]
impl JsCropList {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCropList {
        JsCropList::default()
    }

    /// Append a copy of `image`; returns the new length.
    pub fn push(&mut self, image: &JsRasterImage) -> usize {
        self.images.push(image.raster().clone());
        self.images.len()
    }

    /// Remove the image at `index`. Returns false if out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.images.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// A copy of the image at `index`.
    pub fn get(&self, index: usize) -> Option<JsRasterImage> {
        self.images.get(index).cloned().map(JsRasterImage::from_raster)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.images.len()
    }
}

/// A downloadable file produced by [`export_crops`].
#[wasm_bindgen]
pub struct JsExportedFile {
    inner: ExportedFile,
}

#[wasm_bindgen]
impl JsExportedFile {
    /// Suggested download name (`image-001.png` or `images.zip`)
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// MIME type for the download
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.kind.mime_type().to_string()
    }

    /// File contents as Uint8Array (a copy).
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.inner.bytes.as_slice())
    }
}

/// Package the collected crops for download.
///
/// One crop becomes a single PNG, several become `images.zip`. Returns
/// `undefined` when the list is empty.
///
/// # Arguments
///
/// * `crops` - Collected cell images, in export order
/// * `scheme` - Optional `{ prefix, start, digits }`
///
/// # Errors
///
/// Returns an error if the scheme is malformed or a crop cannot be encoded.
#[wasm_bindgen]
pub fn export_crops(crops: &JsCropList, scheme: JsValue) -> Result<Option<JsExportedFile>, JsValue> {
    let scheme = parse_scheme(scheme)?;
    export::export_images(&crops.images, &scheme)
        .map(|file| file.map(|inner| JsExportedFile { inner }))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Example filenames for `count` crops, such as
/// `"image-001.png, image-002.png, ... image-010.png"`.
///
/// Returns `undefined` when there are no crops or the prefix is empty.
#[wasm_bindgen]
pub fn filename_preview(scheme: JsValue, count: usize) -> Result<Option<String>, JsValue> {
    let scheme = parse_scheme(scheme)?;
    Ok(scheme.preview(count).map(|preview| preview.to_string()))
}
