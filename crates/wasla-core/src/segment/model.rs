//! Audience segment domain model.
//!
//! Represents a predefined Iraqi remittance audience with the descriptive
//! attributes the prompt builders embed. All list fields are ordered; the
//! order drives "first N" truncation in prompts and display.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaslaError};

/// A predefined audience segment with descriptive marketing attributes.
///
/// Instances are constant for the process lifetime. The `name` field is the
/// primary key within a [`super::SegmentCatalog`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AudienceSegment {
    /// Unique human-readable name (catalog key and display name)
    pub name: String,
    /// Free-text summary of who the segment is
    pub description: String,
    /// Free-text age range, e.g. "17-35" (not parsed)
    pub age_range: String,
    /// Ordered sub-category labels
    pub subsegments: Vec<String>,
    /// Ordered motivations, strongest first
    pub motivations: Vec<String>,
    /// Ordered personality traits
    pub traits: Vec<String>,
    /// Ordered concerns, most pressing first
    pub key_concerns: Vec<String>,
    /// Remittance platforms the segment already uses
    pub platforms: Vec<String>,
    /// Search/targeting keywords
    pub keywords: Vec<String>,
}

impl AudienceSegment {
    /// Validates the invariants the catalog relies on.
    ///
    /// # Errors
    ///
    /// Returns [`WaslaError::InvalidSegment`] when the name or description
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WaslaError::invalid_segment("segment name must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(WaslaError::invalid_segment(format!(
                "segment '{}' has an empty description",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str, description: &str) -> AudienceSegment {
        AudienceSegment {
            name: name.to_string(),
            description: description.to_string(),
            age_range: "20-45".to_string(),
            subsegments: vec![],
            motivations: vec![],
            traits: vec![],
            key_concerns: vec![],
            platforms: vec![],
            keywords: vec![],
        }
    }

    #[test]
    fn test_validate_accepts_named_segment() {
        assert!(segment("Iraqi Students Abroad", "Students abroad").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = segment("  ", "desc").validate().unwrap_err();
        assert!(matches!(err, WaslaError::InvalidSegment(_)));
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let err = segment("Named", "").validate().unwrap_err();
        assert!(err.to_string().contains("Named"));
    }
}
