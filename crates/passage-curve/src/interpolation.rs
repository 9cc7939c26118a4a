//! An editable interpolation: passage points, a mode, a constraint and the resulting
//! control points, kept consistent across edits.

use passage_core::{validate_passage_points, PassageError, Result, Validate};
use passage_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

use crate::mode::{Constraint, InterpolationMode};
use crate::sample::sample;
use crate::synthesize::synthesize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpolation {
    mode: InterpolationMode,
    constraint: Constraint,
    points: Vec<Point2>,
    control_points: Vec<Point2>,
}

impl Interpolation {
    /// Create an interpolation using the mode's best default constraint.
    pub fn new(mode: InterpolationMode, points: Vec<Point2>) -> Result<Self> {
        ensure_point_count(mode, points.len())?;
        let constraint = mode.best_constraint();
        let control_points = synthesize(&points, mode, constraint)?;
        Ok(Self {
            mode,
            constraint,
            points,
            control_points,
        })
    }

    /// Create an interpolation driven by caller-supplied control points.
    pub fn with_custom_control_points(
        mode: InterpolationMode,
        points: Vec<Point2>,
        control_points: Vec<Point2>,
    ) -> Result<Self> {
        ensure_point_count(mode, points.len())?;
        Ok(Self {
            mode,
            constraint: Constraint::Custom,
            points,
            control_points,
        })
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Result<Self> {
        self.set_constraint(constraint)?;
        Ok(self)
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    /// Switch mode; the constraint resets to the new mode's best default.
    pub fn set_mode(&mut self, mode: InterpolationMode) -> Result<()> {
        ensure_point_count(mode, self.points.len())?;
        let constraint = mode.best_constraint();
        self.control_points = synthesize(&self.points, mode, constraint)?;
        self.mode = mode;
        self.constraint = constraint;
        Ok(())
    }

    /// Switch constraint. `Custom` freezes the current control points as the custom set.
    pub fn set_constraint(&mut self, constraint: Constraint) -> Result<()> {
        if !self.mode.supports(constraint) {
            return Err(PassageError::InvalidConstraint(format!(
                "{constraint} is not available for {}",
                self.mode
            )));
        }
        if constraint != Constraint::Custom {
            self.control_points = synthesize(&self.points, self.mode, constraint)?;
        }
        self.constraint = constraint;
        Ok(())
    }

    pub fn set_control_points(&mut self, control_points: Vec<Point2>) {
        self.control_points = control_points;
        self.constraint = Constraint::Custom;
    }

    /// Move one control point; the interpolation becomes custom.
    pub fn move_control_point(&mut self, index: usize, to: Point2) -> Result<()> {
        let len = self.control_points.len();
        let slot = self
            .control_points
            .get_mut(index)
            .ok_or(PassageError::IndexOutOfRange { index, len })?;
        *slot = to;
        self.constraint = Constraint::Custom;
        Ok(())
    }

    /// Replace the passage points. Fewer than the mode's minimum leaves the state unchanged.
    pub fn set_points(&mut self, points: Vec<Point2>) -> Result<()> {
        ensure_point_count(self.mode, points.len())?;
        if self.constraint != Constraint::Custom {
            self.control_points = synthesize(&points, self.mode, self.constraint)?;
        }
        self.points = points;
        Ok(())
    }

    /// Insert a passage point at its sorted position. Returns the insertion index.
    pub fn insert_point(&mut self, point: Point2) -> Result<usize> {
        let index = self.points.partition_point(|p| p.x < point.x);
        self.points.insert(index, point);
        self.resynthesize()?;
        Ok(index)
    }

    /// Move a passage point and restore x order.
    pub fn move_point(&mut self, index: usize, to: Point2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(PassageError::IndexOutOfRange { index, len })?;
        *slot = to;
        self.points.sort_by(|a, b| a.x.total_cmp(&b.x));
        self.resynthesize()
    }

    /// Remove a passage point, refusing to drop below the mode's minimum point count.
    pub fn remove_point(&mut self, index: usize) -> Result<Point2> {
        let len = self.points.len();
        if index >= len {
            return Err(PassageError::IndexOutOfRange { index, len });
        }
        ensure_point_count(self.mode, len - 1)?;
        let removed = self.points.remove(index);
        self.resynthesize()?;
        Ok(removed)
    }

    fn resynthesize(&mut self) -> Result<()> {
        if self.constraint != Constraint::Custom {
            self.control_points = synthesize(&self.points, self.mode, self.constraint)?;
        }
        Ok(())
    }

    /// Evaluate the curve at `x`.
    pub fn evaluate(&self, x: f64) -> Point2 {
        (self.mode.curve_evaluator())(&self.points, &self.control_points, x)
    }

    /// Sample from the first to the last passage point.
    pub fn sample(&self, step: f64) -> Vec<Point2> {
        match self.domain() {
            Some((min, max)) => self.sample_range(min, max, step),
            None => Vec::new(),
        }
    }

    pub fn sample_range(&self, min: f64, max: f64, step: f64) -> Vec<Point2> {
        sample(
            self.mode.curve_evaluator(),
            &self.points,
            &self.control_points,
            min,
            max,
            step,
        )
    }

    /// `(first.x, last.x)` of the passage points.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Bounding box of the passage and control points.
    pub fn bounds(&self) -> Option<Aabb2> {
        let passage = Aabb2::from_points(&self.points)?;
        Some(match Aabb2::from_points(&self.control_points) {
            Some(controls) => passage.merge(&controls),
            None => passage,
        })
    }
}

fn ensure_point_count(mode: InterpolationMode, actual: usize) -> Result<()> {
    let required = mode.min_points();
    if actual < required {
        return Err(PassageError::InsufficientPoints { required, actual });
    }
    Ok(())
}

impl Validate for Interpolation {
    fn validate(&self) -> Result<()> {
        validate_passage_points(self.points.iter().map(|p| p.x), self.mode.min_points())
    }
}
