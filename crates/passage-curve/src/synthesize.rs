//! Control-point synthesis from passage points and a continuity constraint.
//!
//! One forward pass over the segments; each segment only looks back at the control
//! points emitted for the previous segment.

use log::debug;
use passage_core::{PassageError, Result};
use passage_math::{DVec2, Point2};

use crate::mode::{Constraint, InterpolationMode};

/// Offset applied to a segment start for control points with no continuity role.
pub const C0_START_OFFSET: DVec2 = DVec2::new(0.0, 1.0);
/// Offset subtracted from a segment end for control points with no continuity role.
pub const C0_END_OFFSET: DVec2 = DVec2::new(2.0, 2.0);
/// Phantom offset past the first and last passage points for C1 Catmull-Rom.
pub const PHANTOM_EDGE_OFFSET: DVec2 = DVec2::new(1.0, 1.0);

/// The two most recently emitted control points.
#[derive(Debug, Clone, Copy, Default)]
struct Lookback {
    older: Option<Point2>,
    last: Option<Point2>,
}

impl Lookback {
    fn push(self, p: Point2) -> Self {
        Self {
            older: self.last,
            last: Some(p),
        }
    }
}

/// Derive the control points `mode` needs under `constraint`.
///
/// Linear modes produce no control points. Constraints outside
/// [`InterpolationMode::legal_constraints`] are rejected with `InvalidConstraint`.
///
/// `Custom` is legal for every mode but has nothing to synthesize, so it is rejected here
/// too. Custom control points are supplied by the caller, either through
/// [`Interpolation::with_custom_control_points`](crate::Interpolation::with_custom_control_points)
/// and [`Interpolation::set_control_points`](crate::Interpolation::set_control_points), or
/// passed straight to an evaluator.
pub fn synthesize(
    points: &[Point2],
    mode: InterpolationMode,
    constraint: Constraint,
) -> Result<Vec<Point2>> {
    if constraint == Constraint::Custom {
        return Err(PassageError::InvalidConstraint(format!(
            "{constraint} control points for {mode} are supplied by the caller"
        )));
    }
    if !mode.supports(constraint) {
        return Err(PassageError::InvalidConstraint(format!(
            "{constraint} is not available for {mode}"
        )));
    }

    let control_points = match mode {
        InterpolationMode::Linear | InterpolationMode::BezierLinear => Vec::new(),
        InterpolationMode::CatmullRom => catmull_rom_phantoms(points, constraint),
        InterpolationMode::BezierQuadratic => quadratic_controls(points, constraint),
        InterpolationMode::BezierCubic => cubic_controls(points, constraint),
    };

    debug!(
        "synthesized {} control points for {} passage points ({mode}, {constraint})",
        control_points.len(),
        points.len()
    );
    Ok(control_points)
}

/// "Before" and "after" phantom points per segment.
fn catmull_rom_phantoms(points: &[Point2], constraint: Constraint) -> Vec<Point2> {
    let n = points.len();
    points
        .windows(2)
        .enumerate()
        .flat_map(|(i, w)| {
            let (start, end) = (w[0], w[1]);
            if constraint == Constraint::C1 {
                let before = if i >= 1 {
                    points[i - 1]
                } else {
                    points[0] - PHANTOM_EDGE_OFFSET
                };
                let after = if i + 2 < n {
                    points[i + 2]
                } else {
                    points[n - 1] + PHANTOM_EDGE_OFFSET
                };
                [before, after]
            } else {
                [start + C0_START_OFFSET, end - C0_END_OFFSET]
            }
        })
        .collect()
}

fn quadratic_controls(points: &[Point2], constraint: Constraint) -> Vec<Point2> {
    let (_, controls) = points.windows(2).fold(
        (Lookback::default(), Vec::with_capacity(points.len())),
        |(look, mut out), w| {
            let start = w[0];
            let control = if constraint == Constraint::C1 {
                // mirror the previous control point through the shared endpoint
                2.0 * start - look.last.unwrap_or(start)
            } else {
                start + C0_START_OFFSET
            };
            out.push(control);
            (look.push(control), out)
        },
    );
    controls
}

fn cubic_controls(points: &[Point2], constraint: Constraint) -> Vec<Point2> {
    let (_, controls) = points.windows(2).fold(
        (Lookback::default(), Vec::with_capacity(2 * points.len())),
        |(look, mut out), w| {
            let (start, end) = (w[0], w[1]);
            let (c1, c2) = match constraint {
                Constraint::C1 => (2.0 * start - look.last.unwrap_or(start), end - C0_END_OFFSET),
                Constraint::C2Buggy => {
                    // Meant to match second derivatives; it does not. Kept verbatim.
                    let o1 = look.older.unwrap_or(start);
                    let o2 = look.last.unwrap_or(start);
                    let c1 = 2.0 * start - o2;
                    (c1, (-2.0 * o2) + o1 + (2.0 * c1))
                }
                Constraint::C0 | Constraint::Custom => {
                    (start + C0_START_OFFSET, end - C0_END_OFFSET)
                }
            };
            out.push(c1);
            out.push(c2);
            (look.push(c1).push(c2), out)
        },
    );
    controls
}
