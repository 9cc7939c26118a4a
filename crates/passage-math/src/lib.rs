pub mod aabb;
pub mod point;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use point::{length_squared_abs, PointDisplay};

/// A 2D point with value semantics: `+`, `-`, `* f64` (both orders) and `/ f64`.
///
/// Equality is exact component-wise comparison.
pub type Point2 = DVec2;
pub type Vector2 = DVec2;
