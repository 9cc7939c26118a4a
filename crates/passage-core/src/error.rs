use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PassageError {
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("Insufficient points: {required} required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("Passage points not strictly increasing in x at index {index}")]
    UnsortedPoints { index: usize },

    #[error("Index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PassageError>;
