//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers failures that happen while turning raw input into domain values
/// (ticket type names, quantity strings, account identifiers). Purchase rule
/// violations have their own error type in `cinema-ticketing`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        assert_eq!(
            DomainError::validation("quantity is not a number").to_string(),
            "validation failed: quantity is not a number"
        );
        assert_eq!(
            DomainError::invalid_id("AccountId: empty").to_string(),
            "invalid identifier: AccountId: empty"
        );
    }
}
