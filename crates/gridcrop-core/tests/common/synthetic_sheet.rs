use gridcrop_core::RasterImage;

/// Generates a white sheet ruled with black lines.
///
/// Each entry of `columns` / `rows` starts a line `thickness` pixels wide.
pub fn ruled_sheet(
    width: u32,
    height: u32,
    columns: &[u32],
    rows: &[u32],
    thickness: u32,
) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(thickness > 0, "line thickness must be positive");

    let on_line = |pos: u32, starts: &[u32]| starts.iter().any(|&s| pos >= s && pos < s + thickness);

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if on_line(x, columns) || on_line(y, rows) {
                0u8
            } else {
                255u8
            };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    RasterImage::from_rgba(width, height, pixels).expect("buffer matches dimensions")
}
