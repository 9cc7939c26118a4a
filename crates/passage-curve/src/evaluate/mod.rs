//! Curve evaluators, one pure function per interpolation mode.
//!
//! Every evaluator takes the passage points, the control points and a query `x` and
//! returns the curve point for that `x`. None of them guard against coincident x values
//! or zero-length chords; those produce non-finite coordinates.

mod bezier;
mod catmull_rom;
mod linear;

use passage_math::Point2;

pub use bezier::{bezier_cubic, bezier_linear, bezier_quadratic};
pub use catmull_rom::{catmull_rom, catmull_rom_with_phantoms, CENTRIPETAL_ALPHA};
pub use linear::linear;

/// Signature shared by all evaluators: `(points, control_points, x) -> point`.
pub type Evaluator = fn(&[Point2], &[Point2], f64) -> Point2;
