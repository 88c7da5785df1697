//! Error types for AST operations
//!
//! Building a tree never fails: constructs that do not parse become bad nodes. The errors
//! here belong to the helpers layered on top of a built tree.

use super::location::Position;
use thiserror::Error;

/// Errors that can occur during AST position lookup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionLookupError {
    /// The position is the sentinel or has non-positive coordinates
    #[error("invalid position {line}:{column}")]
    InvalidPosition { line: isize, column: isize },
    /// No node covers the position
    #[error("no node found at position {line}:{column}")]
    NotFound { line: isize, column: isize },
}

impl PositionLookupError {
    pub fn invalid(pos: Position) -> Self {
        PositionLookupError::InvalidPosition {
            line: pos.line,
            column: pos.column,
        }
    }

    pub fn not_found(pos: Position) -> Self {
        PositionLookupError::NotFound {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// Errors raised while rendering a snapshot
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        let err = PositionLookupError::not_found(Position::new(3, 7, 40));
        assert_eq!(err.to_string(), "no node found at position 3:7");

        let err = PositionLookupError::invalid(Position::INVALID);
        assert_eq!(err.to_string(), "invalid position -1:-1");
    }
}
