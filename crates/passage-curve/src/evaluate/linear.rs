use passage_math::{dvec2, Point2};

use crate::locate::locate_segment;

/// Piecewise linear interpolation through the passage points.
///
/// The returned x is the query itself; only y is interpolated.
pub fn linear(points: &[Point2], _control_points: &[Point2], x: f64) -> Point2 {
    let seg = locate_segment(points, x);
    let slope = (seg.end.y - seg.start.y) / (seg.end.x - seg.start.x);
    dvec2(x, seg.start.y + (x - seg.start.x) * slope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple() -> Vec<Point2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(3.0, 1.0),
            dvec2(6.0, 6.0),
            dvec2(8.0, 12.0),
            dvec2(13.0, 15.0),
        ]
    }

    #[test]
    fn test_linear_passes_through_knots() {
        let pts = simple();
        for p in &pts {
            let q = linear(&pts, &[], p.x);
            assert_eq!(q.x, p.x);
            assert!((q.y - p.y).abs() < 1e-12, "y at x={}: {}", p.x, q.y);
        }
    }

    #[test]
    fn test_linear_between_knots() {
        let pts = simple();
        let p = linear(&pts, &[], 7.0);
        assert_eq!(p.x, 7.0);
        assert!((p.y - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_extrapolates_outside() {
        let pts = simple();
        let p = linear(&pts, &[], 16.0);
        assert!((p.y - 16.8).abs() < 1e-12);
    }

    #[test]
    fn test_linear_duplicate_x_is_not_finite() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(0.0, 1.0)];
        assert!(!linear(&pts, &[], 0.5).y.is_finite());
    }
}
