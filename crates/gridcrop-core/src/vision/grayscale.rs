//! Grayscale conversion using ITU-R BT.601 weights in 14-bit fixed point.
//!
//! These are the weights of the usual RGBA→GRAY conversion found in vision
//! libraries, so line positions match what such a library would report on
//! the same input.

use image::GrayImage;

use crate::decode::{RasterImage, RGBA_CHANNELS};

/// BT.601 red weight scaled by 2^14.
pub const GRAY_R: u32 = 4899;

/// BT.601 green weight scaled by 2^14.
pub const GRAY_G: u32 = 9617;

/// BT.601 blue weight scaled by 2^14.
pub const GRAY_B: u32 = 1868;

const GRAY_SHIFT: u32 = 14;

/// Gray value of one RGB triple. Alpha is ignored.
#[inline]
pub fn gray_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = GRAY_R * r as u32 + GRAY_G * g as u32 + GRAY_B * b as u32 + (1 << (GRAY_SHIFT - 1));
    (y >> GRAY_SHIFT).min(255) as u8
}

/// Convert an RGBA raster to a single-channel intensity map.
///
/// A pixel buffer shorter than `width * height * 4` leaves the missing
/// pixels at zero.
pub fn to_grayscale(image: &RasterImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width, image.height);
    for (dst, px) in gray
        .iter_mut()
        .zip(image.pixels.chunks_exact(RGBA_CHANNELS))
    {
        *dst = gray_u8(px[0], px[1], px[2]);
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_unity() {
        assert_eq!(GRAY_R + GRAY_G + GRAY_B, 1 << GRAY_SHIFT);
    }

    #[test]
    fn test_gray_extremes() {
        assert_eq!(gray_u8(255, 255, 255), 255);
        assert_eq!(gray_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_gray_preserves_neutral_values() {
        for v in [1u8, 64, 127, 128, 200, 254] {
            assert_eq!(gray_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_gray_primaries() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert_eq!(gray_u8(255, 0, 0), 76);
        assert_eq!(gray_u8(0, 255, 0), 150);
        assert_eq!(gray_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_to_grayscale_ignores_alpha() {
        let pixels = vec![255, 255, 255, 0, 0, 0, 0, 255];
        let img = RasterImage::from_rgba(2, 1, pixels).unwrap();
        let gray = to_grayscale(&img);

        assert_eq!(gray.dimensions(), (2, 1));
        assert_eq!(gray.get_pixel(0, 0).0, [255]);
        assert_eq!(gray.get_pixel(1, 0).0, [0]);
    }

    #[test]
    fn test_to_grayscale_short_buffer() {
        let img = RasterImage {
            width: 2,
            height: 2,
            pixels: vec![255, 255, 255, 255],
        };
        let gray = to_grayscale(&img);
        assert_eq!(gray.get_pixel(0, 0).0, [255]);
        assert_eq!(gray.get_pixel(1, 1).0, [0]);
    }
}
