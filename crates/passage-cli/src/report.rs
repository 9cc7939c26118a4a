//! Text and JSON rendering of sampled curves.

use passage_core::Tolerance;
use passage_curve::{Constraint, InterpolationMode, PointSet};
use passage_math::{Aabb2, Point2, PointDisplay};
use serde::Serialize;

/// Everything the demo prints for one sampled curve.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurveReport<'a> {
    pub point_set: PointSet,
    pub mode: InterpolationMode,
    pub constraint: Constraint,
    /// Plot window: passage points padded by [`PLOT_MARGIN`].
    pub window: Option<Aabb2>,
    pub passage_points: &'a [Point2],
    pub control_points: &'a [Point2],
    pub samples: &'a [Point2],
}

/// Padding around the passage points when sizing a plot.
pub const PLOT_MARGIN: f64 = 2.0;

impl CurveReport<'_> {
    /// One `(x,y)` per line; samples landing on a passage point are starred.
    pub fn to_text(&self, tol: Tolerance) -> String {
        let mut out = String::new();
        for s in self.samples {
            let on_passage = self
                .passage_points
                .iter()
                .any(|p| tol.pair_eq((s.x, s.y), (p.x, p.y)));
            let marker = if on_passage { '*' } else { ' ' };
            out.push_str(&format!("{marker} {}\n", PointDisplay(*s)));
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One summary line for a sampled mode.
pub fn summary_line(mode: InterpolationMode, constraint: Constraint, samples: &[Point2]) -> String {
    match Aabb2::from_points(samples) {
        Some(b) => format!(
            "{:<18}{:<10}{:>6} samples  y in [{:.3}, {:.3}]",
            mode.name(),
            constraint.name(),
            samples.len(),
            b.min.y,
            b.max.y
        ),
        None => format!("{:<18}{:<10}{:>6} samples", mode.name(), constraint.name(), 0),
    }
}

/// Modes with their legal constraints, then the point-set names.
pub fn catalog_listing() -> String {
    let mut out = String::from("modes:\n");
    for mode in InterpolationMode::ALL {
        let constraints: Vec<&str> = mode
            .legal_constraints()
            .into_iter()
            .map(Constraint::name)
            .collect();
        out.push_str(&format!(
            "  {:<18}{} (default {})\n",
            mode.name(),
            constraints.join(", "),
            mode.best_constraint()
        ));
    }
    out.push_str("point sets:\n");
    for set in PointSet::ALL {
        out.push_str(&format!("  {set}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_curve::evaluate;
    use passage_math::dvec2;

    fn report<'a>(passage: &'a [Point2], samples: &'a [Point2]) -> CurveReport<'a> {
        CurveReport {
            point_set: PointSet::Single,
            mode: InterpolationMode::Linear,
            constraint: Constraint::C0,
            window: Aabb2::from_points(passage).map(|b| b.expand(PLOT_MARGIN)),
            passage_points: passage,
            control_points: &[],
            samples,
        }
    }

    #[test]
    fn test_text_marks_passage_points() {
        let passage = PointSet::Single.points();
        let samples = passage_curve::sample(evaluate::linear, &passage, &[], 0.0, 3.0, 1.5);
        let text = report(&passage, &samples).to_text(Tolerance::default());
        assert_eq!(text, "* (0,0)\n  (1.5,0.5)\n* (3,1)\n");
    }

    #[test]
    fn test_json_has_window() {
        let passage = PointSet::Single.points();
        let samples = vec![dvec2(0.0, 0.0)];
        let json = report(&passage, &samples).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "linear");
        assert_eq!(value["window"]["min"][0], -2.0);
        assert_eq!(value["window"]["max"][1], 3.0);
        assert_eq!(value["samples"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_catalog_listing() {
        let listing = catalog_listing();
        assert!(listing.contains("bezier-cubic      custom, c0, c1, c2-buggy (default c1)"));
        assert!(listing.contains("  corner-case\n"));
    }

    #[test]
    fn test_summary_line_empty() {
        let line = summary_line(InterpolationMode::Linear, Constraint::C0, &[]);
        assert!(line.ends_with("0 samples"));
    }
}
