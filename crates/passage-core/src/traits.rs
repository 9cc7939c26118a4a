use std::cmp::Ordering;

use crate::error::{PassageError, Result};

/// Validate the preconditions of an interpolation input before evaluating it.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Check that `xs` holds at least `required` abscissas in strictly increasing order.
///
/// Evaluators assume both conditions without re-checking them; callers run this first.
pub fn validate_passage_points<I>(xs: I, required: usize) -> Result<()>
where
    I: IntoIterator<Item = f64>,
{
    let mut count = 0;
    let mut prev: Option<f64> = None;
    for x in xs {
        if let Some(p) = prev {
            // NaN compares as unordered and is rejected too
            if x.partial_cmp(&p) != Some(Ordering::Greater) {
                return Err(PassageError::UnsortedPoints { index: count });
            }
        }
        prev = Some(x);
        count += 1;
    }
    if count < required {
        return Err(PassageError::InsufficientPoints {
            required,
            actual: count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_points_pass() {
        assert!(validate_passage_points([0.0, 3.0, 6.0, 8.0], 4).is_ok());
    }

    #[test]
    fn test_too_few_points() {
        let err = validate_passage_points([0.0, 3.0], 4).unwrap_err();
        assert_eq!(
            err,
            PassageError::InsufficientPoints {
                required: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_duplicate_x_rejected() {
        let err = validate_passage_points([0.0, 3.0, 3.0], 2).unwrap_err();
        assert_eq!(err, PassageError::UnsortedPoints { index: 2 });
    }

    #[test]
    fn test_descending_x_rejected() {
        let err = validate_passage_points([5.0, 1.0], 2).unwrap_err();
        assert_eq!(err, PassageError::UnsortedPoints { index: 1 });
    }
}
