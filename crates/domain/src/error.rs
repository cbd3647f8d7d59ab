//! Unified error types for the domain layer
//!
//! Every failure here is recoverable: the operation that returns it has left
//! the creature and the collection exactly as they were.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field or argument violates its range, format, or membership rule
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Parse error (text to enum conversion)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Container is at capacity
    #[error("Container full: {current}/{max} items")]
    ContainerFull { current: usize, max: usize },
}

impl DomainError {
    /// Creates a validation error naming the offending field or argument.
    ///
    /// # Example
    /// ```
    /// use menagerie_domain::DomainError;
    ///
    /// let err = DomainError::validation("age", "Age must be between 0 and 5000 years");
    /// assert_eq!(err.field(), Some("age"));
    /// ```
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a container full error
    pub fn container_full(current: usize, max: usize) -> Self {
        Self::ContainerFull { current, max }
    }

    /// The field or argument a validation error refers to.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// The human-readable reason, without the field prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name", "Name must be 2-25 characters long");
        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(err.field(), Some("name"));
        assert_eq!(err.message(), "Name must be 2-25 characters long");
        assert_eq!(
            err.to_string(),
            "Invalid name: Name must be 2-25 characters long"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown magic type: Plasma");
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Parse error: Unknown magic type: Plasma");
    }

    #[test]
    fn test_container_full_error() {
        let err = DomainError::container_full(5, 5);
        assert!(matches!(err, DomainError::ContainerFull { .. }));
        assert_eq!(err.to_string(), "Container full: 5/5 items");
        assert_eq!(err.message(), "Container full: 5/5 items");
    }
}
