//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@gridcrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsRasterImage;
use gridcrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG file into RGBA pixels.
///
/// The format is detected from the file's magic bytes, not its name.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are neither PNG nor JPEG
/// - The file is corrupted or truncated
/// - The image has a zero dimension
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gridcrop_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_png() {
        let png = encode_png(&[0u8; 4 * 4 * 4], 4, 4).unwrap();
        let image = decode_image(&png).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.byte_length(), 64);
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage() {
        assert!(decode_image(&[0x00, 0x01, 0x02, 0x03]).is_err());
        assert!(decode_image(&[]).is_err());
    }
}
