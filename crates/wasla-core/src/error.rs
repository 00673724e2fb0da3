//! Error types for the Wasla application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Wasla application.
///
/// This provides typed, structured error variants so callers never have to
/// inspect message strings to learn what went wrong.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum WaslaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A request failed validation before any remote call was attempted
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Segment data rejected at catalog construction time
    #[error("Invalid segment: {0}")]
    InvalidSegment(String),

    /// Remote text generation failed (network, auth, quota, malformed response)
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WaslaError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidRequest error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates an InvalidSegment error
    pub fn invalid_segment(message: impl Into<String>) -> Self {
        Self::InvalidSegment(message.into())
    }

    /// Creates a Generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an InvalidRequest error
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if this is a Generation error
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

/// Conversion from String (for error messages)
impl From<String> for WaslaError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, WaslaError>`.
pub type Result<T> = std::result::Result<T, WaslaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = WaslaError::not_found("segment", "Nonexistent Segment");
        assert_eq!(
            err.to_string(),
            "Entity not found: segment 'Nonexistent Segment'"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_generation_preserves_detail() {
        let err = WaslaError::generation("quota exceeded for gpt-4");
        assert!(err.is_generation());
        assert!(err.to_string().contains("quota exceeded for gpt-4"));
    }
}
