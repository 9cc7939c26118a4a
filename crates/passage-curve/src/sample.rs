//! Fixed-step sampling of an evaluator into a polyline.

use log::{debug, warn};
use passage_core::Result;
use passage_math::Point2;
use rayon::prelude::*;

use crate::mode::{Constraint, InterpolationMode};
use crate::synthesize::synthesize;

/// Steps at or below this value produce no samples.
pub const MIN_SAMPLE_STEP: f64 = 1e-4;

/// Sample `evaluator` for `x` from `min` to `max` inclusive, advancing by `step`.
///
/// `x` is accumulated (`x += step`) rather than recomputed from a sample index, so long
/// ranges with small steps drift slightly and may miss `max`.
///
/// # Returns
/// The evaluated points in increasing `x` order, or an empty vector when
/// `step <= MIN_SAMPLE_STEP`.
pub fn sample<F>(
    evaluator: F,
    points: &[Point2],
    control_points: &[Point2],
    min: f64,
    max: f64,
    step: f64,
) -> Vec<Point2>
where
    F: Fn(&[Point2], &[Point2], f64) -> Point2,
{
    if step.is_nan() || step <= MIN_SAMPLE_STEP {
        warn!("sampling step {step} is not above {MIN_SAMPLE_STEP}, no samples produced");
        return Vec::new();
    }

    let mut samples = Vec::new();
    let mut x = min;
    while x <= max {
        samples.push(evaluator(points, control_points, x));
        x += step;
    }

    debug!("sampled {} points over [{min}, {max}] with step {step}", samples.len());
    samples
}

/// Sample several `(mode, constraint)` combinations over the passage domain in parallel.
///
/// Results come back in request order. A request fails with `InvalidConstraint` when its
/// constraint cannot be synthesized for its mode; this includes `Custom`, whose control
/// points only an [`Interpolation`](crate::Interpolation) can carry.
pub fn sample_modes(
    points: &[Point2],
    requests: &[(InterpolationMode, Constraint)],
    step: f64,
) -> Vec<Result<Vec<Point2>>> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return requests.iter().map(|_| Ok(Vec::new())).collect();
    };
    let (min, max) = (first.x, last.x);

    requests
        .par_iter()
        .map(|&(mode, constraint)| -> Result<Vec<Point2>> {
            let control_points = synthesize(points, mode, constraint)?;
            Ok(sample(mode.curve_evaluator(), points, &control_points, min, max, step))
        })
        .collect()
}
