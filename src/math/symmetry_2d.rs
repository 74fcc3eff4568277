//! Mirror-symmetry tests for planar point sets.
//!
//! Doubled-coordinate convention: vertical axis positions are carried as
//! `2c` (the "doubled axis position") so that axes falling between two
//! grid columns stay representable in integers. Internal arithmetic
//! widens to `i128`, which keeps every comparison exact over the full
//! `i64` coordinate range.

use std::collections::HashMap;

use super::Point2;
use crate::error::{GeometryError, Result};

/// Returns `true` if some vertical line `x = c` reflects the point set
/// onto itself.
///
/// Only the x-coordinates participate: a point at distance `k` to the
/// right of the axis must be matched by exactly one point at distance
/// `k` to the left, with duplicates counted by multiplicity. The
/// y-coordinates are ignored entirely.
///
/// The candidate axis is forced: reflection must swap the minimum and
/// maximum x-coordinates, so only the midpoint of the extremes is ever
/// examined. An empty slice returns `false`.
#[must_use]
pub fn vertical_symmetry_line_exists(points: &[Point2]) -> bool {
    if points.is_empty() {
        return false;
    }

    // Doubled x-coordinates. Every entry is even, so the sum of the
    // extremes is even and the midpoint below is exact.
    let xs: Vec<i128> = points.iter().map(|p| i128::from(p.x) * 2).collect();

    let mut min = xs[0];
    let mut max = xs[0];
    for &x in &xs[1..] {
        min = min.min(x);
        max = max.max(x);
    }
    let mid = (min + max) / 2;

    // Signed count per absolute distance from the candidate axis:
    // +1 for a point right of the axis, -1 for its mirror on the left.
    let mut buckets: HashMap<i128, i64> = HashMap::new();
    for x in xs {
        let d = x - mid;
        let entry = buckets.entry(d.abs()).or_insert(0);
        if d > 0 {
            *entry += 1;
        } else if d < 0 {
            *entry -= 1;
        }
        // d == 0: an on-axis point touches its bucket but shifts nothing.
    }

    buckets.values().all(|&count| count == 0)
}

/// Reflects every point across the vertical line at doubled position
/// `axis_doubled`, i.e. the line `x = axis_doubled / 2`.
///
/// y-coordinates are unchanged. For a point set symmetric about that
/// line, the result is a permutation of the input. The doubled axis
/// position of the candidate line examined by
/// [`vertical_symmetry_line_exists`] is `min_x + max_x`.
///
/// # Errors
///
/// Returns `GeometryError::CoordinateOverflow` if a reflected
/// x-coordinate falls outside the `i64` range, which can only happen for
/// axes far outside the point set's own span. Reflections past the
/// `i128` boundary report the saturated coordinate.
pub fn mirror_across_vertical(points: &[Point2], axis_doubled: i128) -> Result<Vec<Point2>> {
    points
        .iter()
        .map(|p| {
            // A saturated result already lies outside the i64 range, so
            // boundary axes take the error path instead of overflowing.
            let reflected = axis_doubled.saturating_sub(i128::from(p.x));
            match i64::try_from(reflected) {
                Ok(x) => Ok(Point2::new(x, p.y)),
                Err(_) => Err(GeometryError::CoordinateOverflow { value: reflected }.into()),
            }
        })
        .collect()
}
