//! Copying resolved cells out of the source image.
//!
//! Extraction follows canvas `getImageData` semantics: the output always has
//! the requested size, and any part of the rectangle lying outside the source
//! image reads as transparent black. Detected lines can sit a pixel past the
//! image edge, so the rectangle is not clipped.
//!
//! # Example
//!
//! ```ignore
//! let rect = resolve_cell(&lines, Point::new(120.0, 48.5))?;
//! let cell = extract_cell(&image, rect)?;
//! ```

use crate::decode::{RasterImage, RGBA_CHANNELS};
use crate::detect::GridLines;
use crate::resolve::resolve_cell;
use crate::{CellRect, Point};

/// One collected crop, in the order the user clicked.
///
/// Rows are plain values: adding a crop produces a new row and the UI layer
/// owns the growing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CroppedCell {
    /// Position in the crop list, starting at 0.
    pub index: usize,
    /// Cell bounds in source image pixels.
    pub rect: CellRect,
    /// Copied pixels, `rect.width` x `rect.height`.
    pub image: RasterImage,
}

/// Copy the pixels of `rect` out of `image`.
///
/// Returns `None` for a rectangle with a non-positive width or height.
pub fn extract_cell(image: &RasterImage, rect: CellRect) -> Option<RasterImage> {
    if rect.width <= 0 || rect.height <= 0 {
        return None;
    }
    let out_width = rect.width as u32;
    let out_height = rect.height as u32;
    let mut output = RasterImage::transparent(out_width, out_height);

    // Overlap between the rectangle and the source, in source coordinates.
    let src_left = (rect.x as i64).max(0);
    let src_top = (rect.y as i64).max(0);
    let src_right = (rect.x as i64 + rect.width as i64).min(image.width as i64);
    let src_bottom = (rect.y as i64 + rect.height as i64).min(image.height as i64);
    if src_left >= src_right || src_top >= src_bottom {
        return Some(output);
    }

    let row_bytes = (src_right - src_left) as usize * RGBA_CHANNELS;
    for src_y in src_top..src_bottom {
        let dst_y = (src_y - rect.y as i64) as usize;
        let dst_x = (src_left - rect.x as i64) as usize;

        let src_start = (src_y as usize * image.width as usize + src_left as usize) * RGBA_CHANNELS;
        let dst_start = (dst_y * out_width as usize + dst_x) * RGBA_CHANNELS;

        let Some(src_row) = image.pixels.get(src_start..src_start + row_bytes) else {
            break;
        };
        output.pixels[dst_start..dst_start + row_bytes].copy_from_slice(src_row);
    }

    Some(output)
}

/// Resolve the cell under `point` and copy it into a new crop row.
///
/// Returns `None` when the point is not inside a bounded cell.
pub fn crop_cell(
    image: &RasterImage,
    lines: &GridLines,
    point: Point,
    index: usize,
) -> Option<CroppedCell> {
    let rect = resolve_cell(lines, point)?;
    let cell = extract_cell(image, rect)?;
    log::debug!("cropped cell #{} at {:?}", index, rect);
    Some(CroppedCell {
        index,
        rect,
        image: cell,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel encodes its position.
    fn test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(x as u8); // R
                pixels.push(y as u8); // G
                pixels.push(7); // B
                pixels.push(255); // A
            }
        }
        RasterImage::from_rgba(width, height, pixels).unwrap()
    }

    #[test]
    fn test_extract_interior() {
        let img = test_image(20, 20);
        let cell = extract_cell(&img, CellRect::new(3, 4, 5, 6)).unwrap();

        assert_eq!(cell.width, 5);
        assert_eq!(cell.height, 6);
        assert_eq!(cell.pixel(0, 0), Some([3, 4, 7, 255]));
        assert_eq!(cell.pixel(4, 5), Some([7, 9, 7, 255]));
    }

    #[test]
    fn test_extract_full_image() {
        let img = test_image(8, 8);
        let cell = extract_cell(&img, CellRect::new(0, 0, 8, 8)).unwrap();
        assert_eq!(cell, img);
    }

    #[test]
    fn test_extract_overhanging_is_transparent() {
        let img = test_image(10, 10);
        let cell = extract_cell(&img, CellRect::new(8, 8, 4, 4)).unwrap();

        assert_eq!(cell.width, 4);
        assert_eq!(cell.height, 4);
        assert_eq!(cell.pixel(0, 0), Some([8, 8, 7, 255]));
        assert_eq!(cell.pixel(1, 1), Some([9, 9, 7, 255]));
        assert_eq!(cell.pixel(2, 0), Some([0, 0, 0, 0]));
        assert_eq!(cell.pixel(0, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_extract_negative_origin() {
        let img = test_image(10, 10);
        let cell = extract_cell(&img, CellRect::new(-2, -1, 4, 3)).unwrap();

        assert_eq!(cell.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(cell.pixel(2, 1), Some([0, 0, 7, 255]));
        assert_eq!(cell.pixel(3, 2), Some([1, 1, 7, 255]));
    }

    #[test]
    fn test_extract_fully_outside() {
        let img = test_image(10, 10);
        let cell = extract_cell(&img, CellRect::new(50, 50, 3, 3)).unwrap();
        assert!(cell.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_extract_rejects_empty_rect() {
        let img = test_image(10, 10);
        assert!(extract_cell(&img, CellRect::new(1, 1, 0, 5)).is_none());
        assert!(extract_cell(&img, CellRect::new(1, 1, 5, -2)).is_none());
    }

    #[test]
    fn test_crop_cell_builds_row() {
        let img = test_image(40, 40);
        let lines = GridLines::new(vec![10, 20, 30], vec![5, 15, 25]);

        let row = crop_cell(&img, &lines, Point::new(25.0, 20.0), 3).unwrap();
        assert_eq!(row.index, 3);
        assert_eq!(row.rect, CellRect::new(20, 15, 10, 10));
        assert_eq!(row.image.pixel(0, 0), Some([20, 15, 7, 255]));
    }

    #[test]
    fn test_crop_cell_outside_grid() {
        let img = test_image(40, 40);
        let lines = GridLines::new(vec![10, 20, 30], vec![5, 15, 25]);
        assert!(crop_cell(&img, &lines, Point::new(2.0, 20.0), 0).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        let pixels = (0..width * height)
            .flat_map(|i| [(i % 251) as u8, (i / 251) as u8, 0, 255])
            .collect();
        RasterImage::from_rgba(width, height, pixels).unwrap()
    }

    proptest! {
        /// Property: output always has the requested size.
        #[test]
        fn prop_output_matches_rect(
            (width, height) in (1u32..=40, 1u32..=40),
            x in -20i32..60,
            y in -20i32..60,
            w in 1i32..50,
            h in 1i32..50,
        ) {
            let img = create_test_image(width, height);
            let cell = extract_cell(&img, CellRect::new(x, y, w, h)).unwrap();
            prop_assert_eq!(cell.width, w as u32);
            prop_assert_eq!(cell.height, h as u32);
            prop_assert_eq!(cell.pixels.len(), (w * h * 4) as usize);
        }

        /// Property: every output pixel is the source pixel or transparent.
        #[test]
        fn prop_pixels_come_from_source(
            (width, height) in (1u32..=24, 1u32..=24),
            x in -10i32..30,
            y in -10i32..30,
            w in 1i32..20,
            h in 1i32..20,
        ) {
            let img = create_test_image(width, height);
            let cell = extract_cell(&img, CellRect::new(x, y, w, h)).unwrap();
            for cy in 0..h {
                for cx in 0..w {
                    let sx = x + cx;
                    let sy = y + cy;
                    let expected = if sx >= 0 && sy >= 0 {
                        img.pixel(sx as u32, sy as u32).unwrap_or([0, 0, 0, 0])
                    } else {
                        [0, 0, 0, 0]
                    };
                    prop_assert_eq!(cell.pixel(cx as u32, cy as u32), Some(expected));
                }
            }
        }
    }
}
