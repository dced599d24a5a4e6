//! Image decoding for GridCrop.
//!
//! Turns the bytes of a user-selected file into an RGBA [`RasterImage`], the
//! input of grid detection and cell extraction.
//!
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use gridcrop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("sheet.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::decode_image;
pub use types::{DecodeError, RasterImage, RGBA_CHANNELS};
