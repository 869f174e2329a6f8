use thiserror::Error;

/// Rejected age bracket or gender code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid age bracket: {0}")]
    InvalidAgeBracket(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),
}
