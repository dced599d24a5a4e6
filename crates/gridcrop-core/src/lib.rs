//! GridCrop Core - Grid detection and cell extraction library
//!
//! This crate provides the core functionality for GridCrop: finding the ruled
//! lines of a photographed or scanned grid, resolving a click to the cell
//! under it, copying that cell out, and packaging collected cells for
//! download.
//!
//! # Pipeline
//!
//! 1. [`decode::decode_image`] - file bytes to an RGBA raster
//! 2. [`detect::detect_grid_lines`] - raster to sorted x/y line positions
//! 3. [`resolve::resolve_cell`] - line positions + point to a cell rectangle
//! 4. [`crop::extract_cell`] - cell rectangle to a new raster
//! 5. [`export::export_crops`] - collected cells to a PNG or zip archive

pub mod crop;
pub mod decode;
pub mod detect;
pub mod encode;
pub mod export;
pub mod resolve;
pub mod vision;

pub use crop::{crop_cell, extract_cell, CroppedCell};
pub use decode::{decode_image, DecodeError, RasterImage};
pub use detect::{detect_grid_lines, AxisCoordinates, DetectOptions, GridDetector, GridLines};
pub use export::{export_crops, ExportError, ExportedFile, NamingScheme};
pub use resolve::resolve_cell;

/// A location in image pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounds of one grid cell in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Left edge (x-position of the cell's left line)
    pub x: i32,
    /// Top edge (y-position of the cell's top line)
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check whether the rectangle covers at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether `point` lies within the rectangle, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x as f64
            && point.x <= self.right() as f64
            && point.y >= self.y as f64
            && point.y <= self.bottom() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect_edges() {
        let rect = CellRect::new(10, 5, 10, 20);
        assert_eq!(rect.right(), 20);
        assert_eq!(rect.bottom(), 25);
        assert!(!rect.is_empty());
    }

    #[test]
    fn test_cell_rect_empty() {
        assert!(CellRect::new(0, 0, 0, 4).is_empty());
        assert!(CellRect::new(0, 0, 4, -1).is_empty());
        assert!(CellRect::default().is_empty());
    }

    #[test]
    fn test_cell_rect_contains() {
        let rect = CellRect::new(10, 5, 10, 10);
        assert!(rect.contains(Point::new(15.0, 10.0)));
        assert!(rect.contains(Point::new(20.0, 15.0)));
        assert!(!rect.contains(Point::new(9.5, 10.0)));
        assert!(!rect.contains(Point::new(15.0, 15.5)));
    }

    #[test]
    fn test_end_to_end_click() {
        let img = image::RgbaImage::from_fn(60, 40, |x, y| {
            if x % 20 == 0 || y % 20 == 0 {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        });
        let raster = RasterImage::from_rgba_image(img);

        let lines = detect_grid_lines(&raster, &DetectOptions::default());
        assert_eq!(lines.xs.as_slice(), &[1, 21, 41]);
        assert_eq!(lines.ys.as_slice(), &[1, 21]);

        let row = crop_cell(&raster, &lines, Point::new(30.0, 10.0), 0).unwrap();
        assert_eq!(row.rect, CellRect::new(21, 1, 20, 20));

        let file = export_crops(&[row], &NamingScheme::default())
            .unwrap()
            .unwrap();
        assert_eq!(file.name, "image-001.png");
    }
}
