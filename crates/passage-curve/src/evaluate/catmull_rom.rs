//! Centripetal Catmull-Rom evaluation.
//!
//! Knot parameters follow the chord lengths raised to [`CENTRIPETAL_ALPHA`]. The curve
//! parameter for a query is the linear blend of `t1..t2` by the x-ratio inside the
//! segment, not an inverse of the parameterization, so speed along the curve is uneven
//! for irregular spacing.

use passage_math::Point2;

use crate::locate::{control_pair, locate_segment, locate_window};

/// Exponent applied to chord lengths when building knot parameters.
pub const CENTRIPETAL_ALPHA: f64 = 0.5;

/// Catmull-Rom through the passage points, using the neighbouring passage points as the
/// outer points of each segment. Control points are ignored. Requires at least four points.
pub fn catmull_rom(points: &[Point2], _control_points: &[Point2], x: f64) -> Point2 {
    let w = locate_window(points, x);
    centripetal(w.p0, w.p1, w.p2, w.p3, x)
}

/// Catmull-Rom through the passage points, taking the outer points of each segment from
/// the synthesized "before/after" phantom pair at `2*segment` and `2*segment + 1`.
pub fn catmull_rom_with_phantoms(points: &[Point2], control_points: &[Point2], x: f64) -> Point2 {
    let seg = locate_segment(points, x);
    let (before, after) = control_pair(control_points, seg.index);
    centripetal(before, seg.start, seg.end, after, x)
}

fn knot(t: f64, a: Point2, b: Point2) -> f64 {
    t + a.distance(b).powf(CENTRIPETAL_ALPHA)
}

/// Weighted blend `((hi - t) * a + (t - lo) * b) / (hi - lo)`, as two separate ratios.
fn blend(a: Point2, b: Point2, lo: f64, hi: f64, t: f64) -> Point2 {
    (hi - t) / (hi - lo) * a + (t - lo) / (hi - lo) * b
}

fn centripetal(p0: Point2, p1: Point2, p2: Point2, p3: Point2, x: f64) -> Point2 {
    let t0 = 0.0;
    let t1 = knot(t0, p0, p1);
    let t2 = knot(t1, p1, p2);
    let t3 = knot(t2, p2, p3);

    let ratio = (x - p1.x) / (p2.x - p1.x);
    let t = t1 + (t2 - t1) * ratio;

    let a1 = blend(p0, p1, t0, t1, t);
    let a2 = blend(p1, p2, t1, t2, t);
    let a3 = blend(p2, p3, t2, t3, t);

    let b1 = blend(a1, a2, t0, t2, t);
    let b2 = blend(a2, a3, t1, t3, t);

    blend(b1, b2, t1, t2, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use passage_math::dvec2;

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
    fn test_catmull_rom_hits_inner_knots() {
        let pts = simple();
        for p in &pts[1..4] {
            let q = catmull_rom(&pts, &[], p.x);
            assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_catmull_rom_collinear_points_stay_on_line() {
        let pts: Vec<Point2> = (0..5).map(|i| dvec2(i as f64, 2.0 * i as f64)).collect();
        let q = catmull_rom(&pts, &[], 2.5);
        assert_abs_diff_eq!(q.x, 2.5, epsilon = 1e-9);
        assert_abs_diff_eq!(q.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_catmull_rom_coincident_points_are_not_finite() {
        let pts = vec![
            dvec2(3.0, 1.0),
            dvec2(3.0, 1.0),
            dvec2(6.0, 6.0),
            dvec2(8.0, 12.0),
        ];
        assert!(!catmull_rom(&pts, &[], 4.0).is_finite());
    }

    #[test]
    fn test_phantoms_match_neighbours_on_inner_segment() {
        let pts = simple();
        // phantom pair for segment 2 = the passage neighbours of (6,6)-(8,12)
        let mut cps = vec![Point2::ZERO; 4];
        cps.extend([pts[1], pts[4]]);
        let a = catmull_rom_with_phantoms(&pts, &cps, 7.0);
        let b = catmull_rom(&pts, &[], 7.0);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
    }

    #[test]
    fn test_phantoms_hit_segment_endpoints() {
        let pts = simple();
        let cps: Vec<Point2> = (0..4)
            .flat_map(|i| [pts[i] + dvec2(0.0, 1.0), pts[i + 1] - dvec2(2.0, 2.0)])
            .collect();
        for p in &pts {
            let q = catmull_rom_with_phantoms(&pts, &cps, p.x);
            assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-9);
        }
    }
}
