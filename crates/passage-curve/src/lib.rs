//! Passage curves: smooth curves through ordered 2D passage points.
//!
//! A curve is built by picking an [`InterpolationMode`] and a [`Constraint`], deriving
//! control points with [`synthesize`], then sampling the mode's evaluator with
//! [`sample`]. [`Interpolation`] bundles those steps for editing sessions.

pub mod evaluate;
pub mod interpolation;
pub mod locate;
pub mod mode;
pub mod point_set;
pub mod sample;
pub mod synthesize;

pub use evaluate::Evaluator;
pub use interpolation::Interpolation;
pub use mode::{Constraint, InterpolationMode};
pub use point_set::PointSet;
pub use sample::{sample, sample_modes, MIN_SAMPLE_STEP};
pub use synthesize::synthesize;
