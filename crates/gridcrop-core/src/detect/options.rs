//! Parameters for grid line detection.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// Knobs for the two line searches.
///
/// Defaults reproduce the classic setup: one pixel rho resolution, a quarter
/// turn of theta resolution (so each search sees exactly one orientation),
/// and lines must cover 80% of the image extent they cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectOptions {
    /// Fraction of the image height a vertical line must cover (0.0 to 1.0).
    pub vertical_coverage: f64,
    /// Fraction of the image width a horizontal line must cover (0.0 to 1.0).
    pub horizontal_coverage: f64,
    /// Distance resolution of the accumulator in pixels.
    pub rho_step: f64,
    /// Angle resolution of the accumulator in radians.
    pub theta_step: f64,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            vertical_coverage: 0.8,
            horizontal_coverage: 0.8,
            rho_step: 1.0,
            theta_step: FRAC_PI_2,
        }
    }
}

impl DetectOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Vote threshold for a line crossing `extent` pixels.
    ///
    /// Truncated toward zero; negative or NaN products give 0.
    pub fn threshold(coverage: f64, extent: u32) -> u32 {
        (coverage * extent as f64) as u32
    }
}

/// Orientation family searched by one pass of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Lines crossing the full height; their positions are x-coordinates.
    Vertical,
    /// Lines crossing the full width; their positions are y-coordinates.
    Horizontal,
}

impl Axis {
    /// Half-open angular window `[min, max)` of the line normal.
    pub fn theta_window(self) -> (f64, f64) {
        match self {
            Axis::Vertical => (0.0, FRAC_PI_2),
            Axis::Horizontal => (FRAC_PI_2, PI),
        }
    }

    /// Position where a line `(rho, theta)` crosses this axis.
    #[inline]
    pub fn project(self, rho: f64, theta: f64) -> f64 {
        match self {
            Axis::Vertical => theta.cos() * rho,
            Axis::Horizontal => theta.sin() * rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DetectOptions::new();
        assert_eq!(opts.vertical_coverage, 0.8);
        assert_eq!(opts.horizontal_coverage, 0.8);
        assert_eq!(opts.rho_step, 1.0);
        assert_eq!(opts.theta_step, FRAC_PI_2);
    }

    #[test]
    fn test_threshold_truncates() {
        assert_eq!(DetectOptions::threshold(0.8, 80), 64);
        assert_eq!(DetectOptions::threshold(0.8, 101), 80);
        assert_eq!(DetectOptions::threshold(0.8, 0), 0);
        assert_eq!(DetectOptions::threshold(-1.0, 50), 0);
        assert_eq!(DetectOptions::threshold(f64::NAN, 50), 0);
    }

    #[test]
    fn test_axis_projection() {
        assert_eq!(Axis::Vertical.project(42.0, 0.0).round(), 42.0);
        assert_eq!(Axis::Horizontal.project(17.0, FRAC_PI_2).round(), 17.0);
        // A vertical line reported with a flipped normal still lands on x.
        assert_eq!(Axis::Vertical.project(-42.0, PI).round(), 42.0);
    }

    #[test]
    fn test_theta_windows_touch() {
        let (_, v_max) = Axis::Vertical.theta_window();
        let (h_min, _) = Axis::Horizontal.theta_window();
        assert_eq!(v_max, h_min);
    }

    #[test]
    fn test_partial_map_uses_defaults() {
        use serde::de::value::{Error, MapDeserializer};

        let entries = vec![("verticalCoverage", 0.5f64)];
        let de = MapDeserializer::<_, Error>::new(entries.into_iter());
        let opts = DetectOptions::deserialize(de).unwrap();

        assert_eq!(opts.vertical_coverage, 0.5);
        assert_eq!(opts.horizontal_coverage, 0.8);
        assert_eq!(opts.rho_step, 1.0);
    }
}
