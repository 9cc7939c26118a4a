//! Segment lookup over passage points sorted by ascending x.
//!
//! Both locators scan linearly and keep the *last* knot strictly left of `x`, so a query
//! landing exactly on a knot resolves to the segment ending at that knot. Unsorted input
//! still follows the same scan rule.

use passage_math::Point2;

/// A located segment: `index` of its first point and the bracketing pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start: Point2,
    pub end: Point2,
}

/// Four consecutive passage points; `p1`..`p2` bracket the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub pivot: usize,
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

/// Pivot = the largest `i + 1` with `x > points[i + 1].x` for `i` in `first..limit`, else `first`.
fn find_pivot(points: &[Point2], x: f64, first: usize, limit: usize) -> usize {
    (first..limit)
        .rev()
        .find(|&i| x > points[i + 1].x)
        .map_or(first, |i| i + 1)
}

/// Find the segment containing `x`.
///
/// Requires at least two points. `x` outside the knot range resolves to the first or last
/// segment, which the evaluators then extrapolate.
pub fn locate_segment(points: &[Point2], x: f64) -> Segment {
    let index = find_pivot(points, x, 0, points.len().saturating_sub(2));
    Segment {
        index,
        start: points[index],
        end: points[index + 1],
    }
}

/// Find the four-point window around `x` for neighbour-based Catmull-Rom.
///
/// The pivot ranges over `1..=len-3`, so the first and last segments are never bracketed;
/// queries there extrapolate from the nearest inner segment. Requires at least four points.
pub fn locate_window(points: &[Point2], x: f64) -> Window {
    let pivot = find_pivot(points, x, 1, points.len().saturating_sub(3));
    Window {
        pivot,
        p0: points[pivot - 1],
        p1: points[pivot],
        p2: points[pivot + 1],
        p3: points[pivot + 2],
    }
}

/// The single control point of segment `index`, or the last one when out of range.
///
/// An empty sequence yields a NaN point.
pub fn control_point(control_points: &[Point2], index: usize) -> Point2 {
    control_points
        .get(index)
        .or_else(|| control_points.last())
        .copied()
        .unwrap_or(Point2::NAN)
}

/// The control pair of segment `index` (entries `2*index` and `2*index + 1`).
///
/// When the pair is incomplete both entries fall back to the last control point.
pub fn control_pair(control_points: &[Point2], index: usize) -> (Point2, Point2) {
    let first = 2 * index;
    match (control_points.get(first), control_points.get(first + 1)) {
        (Some(&a), Some(&b)) => (a, b),
        _ => {
            let last = control_points.last().copied().unwrap_or(Point2::NAN);
            (last, last)
        }
    }
}
