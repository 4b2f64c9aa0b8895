//! Error Types
//!
//! Load-time failures abort startup; query-time failures are reported per
//! query and leave the engine untouched.

use thiserror::Error;

/// Failure while building the embedding table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read embeddings: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: component {field} is not a number: {value:?}")]
    InvalidComponent {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("invalid vector dimension: {0}")]
    InvalidDimension(usize),
}

/// Failure while evaluating or running a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Word not found: {0}")]
    UnknownWord(String),

    #[error("No valid words in expression.")]
    EmptyExpression,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl QueryError {
    /// Short label used for metrics bucketing
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::UnknownWord(_) => "unknown_word",
            QueryError::EmptyExpression => "empty_expression",
            QueryError::DimensionMismatch { .. } => "dimension_mismatch",
        }
    }
}

/// Failure in the line protocol codec.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request line exceeds {limit} bytes")]
    LineTooLong { limit: usize },

    #[error("request is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_messages() {
        assert_eq!(
            QueryError::UnknownWord("atlantis".into()).to_string(),
            "Word not found: atlantis"
        );
        assert_eq!(QueryError::EmptyExpression.kind(), "empty_expression");
    }

    #[test]
    fn test_load_error_from_io() {
        let err: LoadError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
