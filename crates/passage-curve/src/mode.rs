//! Interpolation modes, continuity constraints and the per-mode constraint catalog.

use std::fmt;
use std::str::FromStr;

use passage_core::{PassageError, Result};
use passage_math::Point2;
use serde::{Deserialize, Serialize};

use crate::evaluate::{self, Evaluator};

/// The curve family used between passage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationMode {
    Linear,
    CatmullRom,
    BezierLinear,
    BezierQuadratic,
    BezierCubic,
}

/// How synthesized control points tie adjacent segments together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Constraint {
    /// Position only; control points get arbitrary offsets.
    C0,
    /// Tangent continuity across the shared endpoint.
    C1,
    /// Attempted curvature continuity for cubic Bezier. The algebra is wrong and is kept
    /// as-is so existing outputs stay reproducible.
    C2Buggy,
    /// Control points come from the caller and are never synthesized.
    Custom,
}

impl InterpolationMode {
    pub const ALL: [InterpolationMode; 5] = [
        InterpolationMode::Linear,
        InterpolationMode::CatmullRom,
        InterpolationMode::BezierLinear,
        InterpolationMode::BezierQuadratic,
        InterpolationMode::BezierCubic,
    ];

    /// Minimum number of passage points the evaluator can index safely.
    pub fn min_points(self) -> usize {
        match self {
            InterpolationMode::CatmullRom => 4,
            _ => 2,
        }
    }

    pub fn control_points_per_segment(self) -> usize {
        match self {
            InterpolationMode::Linear | InterpolationMode::BezierLinear => 0,
            InterpolationMode::BezierQuadratic => 1,
            InterpolationMode::CatmullRom | InterpolationMode::BezierCubic => 2,
        }
    }

    /// Constraints that make sense for this mode, `Custom` first.
    pub fn legal_constraints(self) -> Vec<Constraint> {
        let mut constraints = vec![Constraint::Custom, Constraint::C0];
        match self {
            InterpolationMode::Linear | InterpolationMode::BezierLinear => {}
            InterpolationMode::CatmullRom | InterpolationMode::BezierQuadratic => {
                constraints.push(Constraint::C1);
            }
            InterpolationMode::BezierCubic => {
                constraints.push(Constraint::C1);
                constraints.push(Constraint::C2Buggy);
            }
        }
        constraints
    }

    /// The strongest working constraint: last legal entry that is neither custom nor buggy.
    pub fn best_constraint(self) -> Constraint {
        self.legal_constraints()
            .into_iter()
            .rev()
            .find(|c| !matches!(c, Constraint::Custom | Constraint::C2Buggy))
            .unwrap_or(Constraint::C0)
    }

    pub fn supports(self, constraint: Constraint) -> bool {
        self.legal_constraints().contains(&constraint)
    }

    pub fn evaluator(self) -> Evaluator {
        match self {
            InterpolationMode::Linear => evaluate::linear,
            InterpolationMode::CatmullRom => evaluate::catmull_rom,
            InterpolationMode::BezierLinear => evaluate::bezier_linear,
            InterpolationMode::BezierQuadratic => evaluate::bezier_quadratic,
            InterpolationMode::BezierCubic => evaluate::bezier_cubic,
        }
    }

    /// Evaluator that reads the curve shape from the control points.
    ///
    /// Identical to [`evaluator`](Self::evaluator) except for `CatmullRom`, which runs
    /// through the synthesized or custom before/after phantom points instead of the
    /// neighbouring passage points, so its constraint and control points take effect.
    pub fn curve_evaluator(self) -> Evaluator {
        match self {
            InterpolationMode::CatmullRom => evaluate::catmull_rom_with_phantoms,
            mode => mode.evaluator(),
        }
    }

    /// Evaluate the curve of this mode at `x`.
    pub fn evaluate(self, points: &[Point2], control_points: &[Point2], x: f64) -> Point2 {
        (self.evaluator())(points, control_points, x)
    }

    pub fn name(self) -> &'static str {
        match self {
            InterpolationMode::Linear => "linear",
            InterpolationMode::CatmullRom => "catmull-rom",
            InterpolationMode::BezierLinear => "bezier-linear",
            InterpolationMode::BezierQuadratic => "bezier-quadratic",
            InterpolationMode::BezierCubic => "bezier-cubic",
        }
    }
}

impl Constraint {
    pub fn name(self) -> &'static str {
        match self {
            Constraint::C0 => "c0",
            Constraint::C1 => "c1",
            Constraint::C2Buggy => "c2-buggy",
            Constraint::Custom => "custom",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationMode {
    type Err = PassageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PassageError::Parse(format!("unknown interpolation mode '{s}'")))
    }
}

impl FromStr for Constraint {
    type Err = PassageError;

    fn from_str(s: &str) -> Result<Self> {
        [
            Constraint::C0,
            Constraint::C1,
            Constraint::C2Buggy,
            Constraint::Custom,
        ]
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| PassageError::Parse(format!("unknown constraint '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::synthesize;

    #[test]
    fn test_catalog_order() {
        assert_eq!(
            InterpolationMode::BezierCubic.legal_constraints(),
            vec![
                Constraint::Custom,
                Constraint::C0,
                Constraint::C1,
                Constraint::C2Buggy
            ]
        );
        assert_eq!(
            InterpolationMode::Linear.legal_constraints(),
            vec![Constraint::Custom, Constraint::C0]
        );
        assert_eq!(
            InterpolationMode::BezierLinear.legal_constraints(),
            vec![Constraint::Custom, Constraint::C0]
        );
        assert_eq!(
            InterpolationMode::CatmullRom.legal_constraints(),
            vec![Constraint::Custom, Constraint::C0, Constraint::C1]
        );
        assert_eq!(
            InterpolationMode::BezierQuadratic.legal_constraints(),
            vec![Constraint::Custom, Constraint::C0, Constraint::C1]
        );
    }

    #[test]
    fn test_best_constraint_skips_buggy() {
        assert_eq!(InterpolationMode::Linear.best_constraint(), Constraint::C0);
        assert_eq!(InterpolationMode::CatmullRom.best_constraint(), Constraint::C1);
        assert_eq!(InterpolationMode::BezierCubic.best_constraint(), Constraint::C1);
    }

    #[test]
    fn test_supports() {
        assert!(InterpolationMode::BezierCubic.supports(Constraint::C2Buggy));
        assert!(!InterpolationMode::CatmullRom.supports(Constraint::C2Buggy));
        assert!(!InterpolationMode::Linear.supports(Constraint::C1));
        assert!(InterpolationMode::Linear.supports(Constraint::Custom));
    }

    #[test]
    fn test_curve_evaluator_follows_control_points() {
        let pts = crate::point_set::PointSet::Simple.points();
        let mode = InterpolationMode::CatmullRom;
        let c0 = synthesize(&pts, mode, Constraint::C0).unwrap();
        let c1 = synthesize(&pts, mode, Constraint::C1).unwrap();

        let a = (mode.curve_evaluator())(&pts, &c0, 4.5);
        let b = (mode.curve_evaluator())(&pts, &c1, 4.5);
        assert!((a - b).length() > 1e-6);

        assert_eq!(mode.evaluate(&pts, &c0, 4.5), mode.evaluate(&pts, &c1, 4.5));
        assert_eq!(
            (InterpolationMode::BezierCubic.curve_evaluator())(&pts, &c1, 4.5),
            InterpolationMode::BezierCubic.evaluate(&pts, &c1, 4.5)
        );
    }

    #[test]
    fn test_parse_names() {
        for mode in InterpolationMode::ALL {
            assert_eq!(mode.name().parse::<InterpolationMode>().unwrap(), mode);
        }
        assert_eq!("C2-Buggy".parse::<Constraint>().unwrap(), Constraint::C2Buggy);
        assert!(matches!(
            "spline".parse::<InterpolationMode>(),
            Err(PassageError::Parse(_))
        ));
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&InterpolationMode::BezierQuadratic).unwrap();
        assert_eq!(json, "\"bezier-quadratic\"");
        let c: Constraint = serde_json::from_str("\"c2-buggy\"").unwrap();
        assert_eq!(c, Constraint::C2Buggy);
    }
}
