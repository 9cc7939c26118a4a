//! Bezier segments of degree 1 to 3 between consecutive passage points.
//!
//! The Bezier parameter of a segment is the x-ratio `t = (x - p0.x) / (p_end.x - p0.x)`.

use passage_math::Point2;

use crate::locate::{control_pair, control_point, locate_segment};

/// Degree-1 Bezier blend. Same curve as [`super::linear`], expressed as `p0 + t (p1 - p0)`.
pub fn bezier_linear(points: &[Point2], _control_points: &[Point2], x: f64) -> Point2 {
    let seg = locate_segment(points, x);
    let t = (x - seg.start.x) / (seg.end.x - seg.start.x);
    seg.start + t * (seg.end - seg.start)
}

/// Quadratic Bezier using one control point per segment.
pub fn bezier_quadratic(points: &[Point2], control_points: &[Point2], x: f64) -> Point2 {
    let seg = locate_segment(points, x);
    let (p0, p2) = (seg.start, seg.end);
    let p1 = control_point(control_points, seg.index);

    let t = (x - p0.x) / (p2.x - p0.x);
    let s = 1.0 - t;

    s.powi(2) * p0 + 2.0 * s * t * p1 + t.powi(2) * p2
}

/// Cubic Bezier using two control points per segment.
pub fn bezier_cubic(points: &[Point2], control_points: &[Point2], x: f64) -> Point2 {
    let seg = locate_segment(points, x);
    let (p0, p3) = (seg.start, seg.end);
    let (p1, p2) = control_pair(control_points, seg.index);

    let t = (x - p0.x) / (p3.x - p0.x);
    let s = 1.0 - t;

    s.powi(3) * p0 + 3.0 * s.powi(2) * t * p1 + 3.0 * s * t.powi(2) * p2 + t.powi(3) * p3
}
