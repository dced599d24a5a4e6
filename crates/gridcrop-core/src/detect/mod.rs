//! Grid line detection.
//!
//! Detection runs once per loaded image:
//!
//! 1. Grayscale conversion
//! 2. Combined Sobel edge map
//! 3. Two restricted Hough searches: near-vertical lines that cover most of
//!    the image height, near-horizontal lines that cover most of its width
//! 4. Projection of each line onto its axis, rounding and sorting
//!
//! The result, [`GridLines`], is meant to be cached by the caller for the
//! lifetime of the image and handed to [`crate::resolve::resolve_cell`] for
//! every click.
//!
//! # Examples
//!
//! ```ignore
//! use gridcrop_core::detect::{detect_grid_lines, DetectOptions};
//!
//! let lines = detect_grid_lines(&image, &DetectOptions::default());
//! println!("{} columns, {} rows", lines.xs.len(), lines.ys.len());
//! ```

mod axis;
mod options;

pub use axis::AxisCoordinates;
pub use options::{Axis, DetectOptions};

use crate::decode::RasterImage;
use crate::vision::{HoughParams, NativeVision, VisionBackend};

/// Detected grid: x-positions of vertical lines and y-positions of
/// horizontal lines, both ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLines {
    pub xs: AxisCoordinates,
    pub ys: AxisCoordinates,
}

impl GridLines {
    /// Build from raw coordinate lists in any order.
    pub fn new(xs: Vec<i32>, ys: Vec<i32>) -> Self {
        Self {
            xs: AxisCoordinates::from_unsorted(xs),
            ys: AxisCoordinates::from_unsorted(ys),
        }
    }

    /// Number of fully bounded cells.
    pub fn cell_count(&self) -> usize {
        self.xs.len().saturating_sub(1) * self.ys.len().saturating_sub(1)
    }

    /// Check whether no line was found on either axis.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() && self.ys.is_empty()
    }
}

/// Grid detector bound to an image-processing backend.
#[derive(Debug, Clone, Default)]
pub struct GridDetector<B = NativeVision> {
    backend: B,
    options: DetectOptions,
}

impl GridDetector<NativeVision> {
    /// Create a detector using the built-in backend.
    pub fn new(options: DetectOptions) -> Self {
        Self::with_backend(NativeVision, options)
    }
}

impl<B: VisionBackend> GridDetector<B> {
    /// Create a detector using a caller-supplied backend.
    pub fn with_backend(backend: B, options: DetectOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Detect grid lines in `image`.
    ///
    /// Never fails: an image without long enough edges (including a
    /// zero-sized one) yields empty coordinate lists, as do step sizes so
    /// fine that the accumulator would exceed
    /// [`MAX_ACCUMULATOR_BYTES`](crate::vision::MAX_ACCUMULATOR_BYTES).
    pub fn detect(&self, image: &RasterImage) -> GridLines {
        if image.is_empty() {
            log::debug!("skipping detection on empty {}x{} image", image.width, image.height);
            return GridLines::default();
        }

        let gray = self.backend.to_grayscale(image);
        let edges = self.backend.directional_gradient(&gray);
        drop(gray);

        let xs = self.search(&edges, Axis::Vertical, image.height);
        let ys = self.search(&edges, Axis::Horizontal, image.width);

        log::debug!(
            "detected {} vertical and {} horizontal lines in {}x{} image",
            xs.len(),
            ys.len(),
            image.width,
            image.height
        );
        GridLines { xs, ys }
    }

    fn search(&self, edges: &image::GrayImage, axis: Axis, extent: u32) -> AxisCoordinates {
        let coverage = match axis {
            Axis::Vertical => self.options.vertical_coverage,
            Axis::Horizontal => self.options.horizontal_coverage,
        };
        let (min_theta, max_theta) = axis.theta_window();
        let params = HoughParams {
            rho_step: self.options.rho_step,
            theta_step: self.options.theta_step,
            threshold: DetectOptions::threshold(coverage, extent),
            min_theta,
            max_theta,
        };
        let lines = self.backend.hough_line_search(edges, &params);
        log::trace!("{:?} search: {} candidate(s)", axis, lines.len());
        AxisCoordinates::from_lines(&lines, axis)
    }
}

/// Detect grid lines with the built-in backend.
pub fn detect_grid_lines(image: &RasterImage, options: &DetectOptions) -> GridLines {
    GridDetector::new(*options).detect(image)
}
