//! Point-to-cell resolution against detected grid lines.
//!
//! A click resolves to the cell whose left/top lines lie strictly before the
//! point and whose right/bottom lines lie at or after it. Points on or before
//! the first line of either axis, or past the last one, resolve to nothing:
//! only fully bounded interior cells are ever returned.

use crate::detect::GridLines;
use crate::{CellRect, Point};

/// Resolve the grid cell containing `point`.
///
/// Returns `None` (a no-op for the caller, not an error) when the point is
/// outside the interior grid, when either axis has fewer than two lines, or
/// when the point is not finite. A returned rectangle always has positive
/// width and height and is not clipped to the image.
pub fn resolve_cell(lines: &GridLines, point: Point) -> Option<CellRect> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    let (left, right) = lines.xs.bracket(point.x)?;
    let (top, bottom) = lines.ys.bracket(point.y)?;

    Some(CellRect {
        x: left,
        y: top,
        width: right.checked_sub(left)?,
        height: bottom.checked_sub(top)?,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: returned cells are non-empty and built from adjacent lines.
        #[test]
        fn prop_resolver_soundness(
            xs in prop::collection::vec(-500i32..500, 0..12),
            ys in prop::collection::vec(-500i32..500, 0..12),
            px in -600.0f64..600.0,
            py in -600.0f64..600.0,
        ) {
            let lines = GridLines::new(xs, ys);
            if let Some(rect) = resolve_cell(&lines, Point::new(px, py)) {
                prop_assert!(rect.width > 0);
                prop_assert!(rect.height > 0);
                prop_assert!(rect.contains(Point::new(px, py)));

                let xs = lines.xs.as_slice();
                let i = xs.binary_search(&rect.x).unwrap();
                prop_assert_eq!(xs[i + 1], rect.x + rect.width);

                let ys = lines.ys.as_slice();
                let j = ys.binary_search(&rect.y).unwrap();
                prop_assert_eq!(ys[j + 1], rect.y + rect.height);
            }
        }

        /// Property: points at or before the first line never resolve.
        #[test]
        fn prop_boundary_rejection(
            xs in prop::collection::vec(-500i32..500, 1..12),
            ys in prop::collection::vec(-500i32..500, 1..12),
            dx in 0.0f64..50.0,
            py in -600.0f64..600.0,
        ) {
            let lines = GridLines::new(xs, ys);
            let first = lines.xs.as_slice()[0] as f64;
            prop_assert_eq!(resolve_cell(&lines, Point::new(first - dx, py)), None);
        }
    }
}
