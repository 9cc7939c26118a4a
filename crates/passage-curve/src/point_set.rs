//! Named passage-point fixtures.

use std::fmt;
use std::str::FromStr;

use passage_core::{PassageError, Result};
use passage_math::{dvec2, Point2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointSet {
    /// One segment.
    Single,
    Simple,
    Convex,
    /// Steep alternating slopes.
    Intense,
    /// Spikes next to a nearly flat segment.
    CornerCase,
}

impl PointSet {
    pub const ALL: [PointSet; 5] = [
        PointSet::Single,
        PointSet::Simple,
        PointSet::Convex,
        PointSet::Intense,
        PointSet::CornerCase,
    ];

    /// The passage points of this set, sorted by strictly increasing x.
    pub fn points(self) -> Vec<Point2> {
        let raw: &[(f64, f64)] = match self {
            PointSet::Single => &[(0.0, 0.0), (3.0, 1.0)],
            PointSet::Simple => &[(0.0, 0.0), (3.0, 1.0), (6.0, 6.0), (8.0, 12.0), (13.0, 15.0)],
            PointSet::Convex => &[
                (0.0, 0.0),
                (2.0, 4.0),
                (4.0, 20.0),
                (6.0, 50.0),
                (8.0, 60.0),
                (11.0, 50.0),
                (14.0, 57.0),
                (16.0, 62.0),
            ],
            PointSet::Intense => &[
                (0.0, 0.0),
                (2.0, 9.0),
                (3.0, 32.0),
                (6.0, -1.0),
                (7.0, 60.0),
                (12.0, 22.0),
                (13.0, 29.0),
            ],
            PointSet::CornerCase => &[
                (0.0, 0.0),
                (2.0, 0.5),
                (3.0, 90.0),
                (4.0, 0.0),
                (5.0, 60.0),
                (8.0, 0.0),
            ],
        };
        raw.iter().map(|&(x, y)| dvec2(x, y)).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            PointSet::Single => "single",
            PointSet::Simple => "simple",
            PointSet::Convex => "convex",
            PointSet::Intense => "intense",
            PointSet::CornerCase => "corner-case",
        }
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointSet {
    type Err = PassageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PassageError::Parse(format!("unknown point set '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_core::validate_passage_points;

    #[test]
    fn test_all_sets_are_sorted() {
        for set in PointSet::ALL {
            let pts = set.points();
            assert!(
                validate_passage_points(pts.iter().map(|p| p.x), 2).is_ok(),
                "{set} is not sorted"
            );
        }
    }

    #[test]
    fn test_simple_set() {
        let pts = PointSet::Simple.points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[3], dvec2(8.0, 12.0));
    }

    #[test]
    fn test_parse() {
        assert_eq!("corner-case".parse::<PointSet>().unwrap(), PointSet::CornerCase);
        assert!("custom".parse::<PointSet>().is_err());
    }
}
