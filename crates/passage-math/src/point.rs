//! Helpers on top of glam's `DVec2` for passage and control points.

use std::fmt;

use crate::Point2;

/// `|x^2 + y^2|`.
///
/// The absolute value only matters for signed-zero artifacts; NaN propagates.
pub fn length_squared_abs(p: Point2) -> f64 {
    (p.x * p.x + p.y * p.y).abs()
}

/// Formats a point as `(x,y)` with shortest round-trip float formatting.
#[derive(Debug, Clone, Copy)]
pub struct PointDisplay(pub Point2);

impl fmt::Display for PointDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0.x, self.0.y)
    }
}
