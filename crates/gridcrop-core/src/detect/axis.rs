//! Sorted line positions along one image axis.

use super::Axis;
use crate::vision::LineCandidate;

/// Ascending pixel positions where grid lines cross one axis.
///
/// Values are strictly ascending: construction sorts numerically and drops
/// repeated positions. There is no mutating API, a new image gets a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisCoordinates {
    values: Vec<i32>,
}

impl AxisCoordinates {
    /// Build from positions in any order.
    pub fn from_unsorted(mut values: Vec<i32>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Project detected lines onto `axis` and sort the result.
    ///
    /// Candidates with a non-finite rho or theta are skipped.
    pub fn from_lines(lines: &[LineCandidate], axis: Axis) -> Self {
        let values = lines
            .iter()
            .filter(|line| line.rho.is_finite() && line.theta.is_finite())
            .map(|line| axis.project(line.rho, line.theta).round())
            .filter(|v| v.is_finite())
            .map(|v| v as i32)
            .collect();
        Self::from_unsorted(values)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    /// Index of the first position `>= value`, or `len()` if there is none.
    pub fn first_at_or_after(&self, value: f64) -> usize {
        self.values.partition_point(|&v| (v as f64) < value)
    }

    /// The two adjacent positions strictly enclosing `value` from below.
    ///
    /// Returns `(lower, upper)` with `lower < value <= upper`. A value at or
    /// before the first line, or past the last one, has no bracket.
    pub fn bracket(&self, value: f64) -> Option<(i32, i32)> {
        let i = self.first_at_or_after(value);
        if i == 0 {
            return None;
        }
        let upper = *self.values.get(i)?;
        Some((self.values[i - 1], upper))
    }
}

impl From<Vec<i32>> for AxisCoordinates {
    fn from(values: Vec<i32>) -> Self {
        Self::from_unsorted(values)
    }
}

impl From<AxisCoordinates> for Vec<i32> {
    fn from(coords: AxisCoordinates) -> Self {
        coords.values
    }
}
