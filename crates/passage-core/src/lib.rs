pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{PassageError, Result};
pub use tolerance::Tolerance;
pub use traits::{validate_passage_points, Validate};
