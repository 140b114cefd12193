//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (identity, conflicts).
/// Field-level schema failures have their own richer type in
/// `opsuite-schema`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty or unparsable).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two sources of the same fact disagree (e.g. path id vs body id).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = DomainError::conflict("path id 'a' does not match body id 'b'");
        assert_eq!(err.to_string(), "conflict: path id 'a' does not match body id 'b'");

        let err = DomainError::invalid_id("must not be empty");
        assert_eq!(err.to_string(), "invalid identifier: must not be empty");
    }
}
