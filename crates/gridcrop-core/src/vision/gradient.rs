//! First-derivative Sobel responses saturated into 8-bit maps.
//!
//! - 3×3 kernels, reflect-101 borders (`dcb|abcd|cba`).
//! - Each response is clamped to `0..=255`, so only rising intensity
//!   (dark→light along the axis) survives. A dark ruled line on paper
//!   therefore shows up once, on its far side, instead of twice.
//! - The combined map is the saturating sum of both directions.

use image::GrayImage;

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Mirror an out-of-range index back into `0..len` without repeating the edge.
#[inline]
fn reflect_101(i: i64, len: u32) -> u32 {
    let len = len as i64;
    if len == 1 {
        return 0;
    }
    let mut i = i;
    if i < 0 {
        i = -i;
    }
    if i >= len {
        i = 2 * len - 2 - i;
    }
    i.clamp(0, len - 1) as u32
}

fn convolve_saturating(gray: &GrayImage, kernel: &Kernel3) -> GrayImage {
    let (w, h) = gray.dimensions();
    let mut out = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let ys = [
            reflect_101(y as i64 - 1, h),
            y,
            reflect_101(y as i64 + 1, h),
        ];
        for x in 0..w {
            let xs = [
                reflect_101(x as i64 - 1, w),
                x,
                reflect_101(x as i64 + 1, w),
            ];
            let mut sum = 0i32;
            for (ky, &sy) in ys.iter().enumerate() {
                for (kx, &sx) in xs.iter().enumerate() {
                    sum += kernel[ky][kx] * gray.get_pixel(sx, sy).0[0] as i32;
                }
            }
            out.put_pixel(x, y, image::Luma([sum.clamp(0, 255) as u8]));
        }
    }
    out
}

/// Horizontal derivative (responds to vertical edges).
pub fn sobel_x(gray: &GrayImage) -> GrayImage {
    convolve_saturating(gray, &SOBEL_KERNEL_X)
}

/// Vertical derivative (responds to horizontal edges).
pub fn sobel_y(gray: &GrayImage) -> GrayImage {
    convolve_saturating(gray, &SOBEL_KERNEL_Y)
}

/// Combined edge-strength map: `sat(sobel_x + sobel_y)`.
pub fn directional_gradient(gray: &GrayImage) -> GrayImage {
    let mut combined = sobel_x(gray);
    let dy = sobel_y(gray);
    for (dst, &v) in combined.iter_mut().zip(dy.iter()) {
        *dst = dst.saturating_add(v);
    }
    combined
}
