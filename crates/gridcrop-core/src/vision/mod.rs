//! Image-processing primitives used by grid detection.
//!
//! The detector only talks to these through [`VisionBackend`], so the line
//! geometry does not depend on which library (if any) does the pixel work.
//! [`NativeVision`] is the pure Rust implementation used by default.
//!
//! All buffers are owned `image::GrayImage` values; they are released when
//! the detection call that created them returns.

mod gradient;
mod grayscale;
mod hough;

pub use gradient::{directional_gradient, sobel_x, sobel_y};
pub use grayscale::{gray_u8, to_grayscale, GRAY_B, GRAY_G, GRAY_R};
pub use hough::{angle_count, hough_lines, HoughParams, LineCandidate, MAX_ACCUMULATOR_BYTES};

use image::GrayImage;

use crate::decode::RasterImage;

/// The three operations grid detection needs from an image library.
pub trait VisionBackend {
    /// Single-channel intensity map of the same size as `image`.
    fn to_grayscale(&self, image: &RasterImage) -> GrayImage;

    /// Edge-strength map combining horizontal and vertical gradients.
    fn directional_gradient(&self, gray: &GrayImage) -> GrayImage;

    /// Lines in `edges` matching `params`, strongest first.
    fn hough_line_search(&self, edges: &GrayImage, params: &HoughParams) -> Vec<LineCandidate>;
}

/// Built-in backend implemented in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeVision;

impl VisionBackend for NativeVision {
    fn to_grayscale(&self, image: &RasterImage) -> GrayImage {
        to_grayscale(image)
    }

    fn directional_gradient(&self, gray: &GrayImage) -> GrayImage {
        directional_gradient(gray)
    }

    fn hough_line_search(&self, edges: &GrayImage, params: &HoughParams) -> Vec<LineCandidate> {
        hough_lines(edges, params)
    }
}
