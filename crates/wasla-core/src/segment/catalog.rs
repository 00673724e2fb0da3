//! Immutable, definition-ordered segment catalog.

use serde::{Deserialize, Serialize};

use super::model::AudienceSegment;
use super::preset::builtin_segments;
use crate::error::{Result, WaslaError};

/// Read-only mapping from segment name to its descriptor.
///
/// Built once at process start and injected into whatever needs lookups.
/// Iteration order is definition order, which callers use for default
/// selection and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentCatalog {
    segments: Vec<AudienceSegment>,
}

impl SegmentCatalog {
    /// Builds a catalog from the given segments, validating each entry and
    /// rejecting duplicate names.
    pub fn new(segments: Vec<AudienceSegment>) -> Result<Self> {
        for (index, segment) in segments.iter().enumerate() {
            segment.validate()?;
            if segments[..index].iter().any(|s| s.name == segment.name) {
                return Err(WaslaError::invalid_segment(format!(
                    "duplicate segment name '{}'",
                    segment.name
                )));
            }
        }
        Ok(Self { segments })
    }

    /// Builds the catalog of built-in Iraqi remittance segments.
    pub fn builtin() -> Self {
        // Safe to expect: the preset data is covered by tests in preset.rs
        Self::new(builtin_segments()).expect("built-in segment data is valid")
    }

    /// Looks up a segment by name.
    ///
    /// # Errors
    ///
    /// Returns [`WaslaError::NotFound`] when no segment has that name.
    pub fn get(&self, name: &str) -> Result<&AudienceSegment> {
        self.segments
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| WaslaError::not_found("segment", name))
    }

    /// Returns true when a segment with that name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.segments.iter().any(|s| s.name == name)
    }

    /// Segment names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.name.as_str())
    }

    /// All segments in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &AudienceSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Builds the rows of the multi-segment comparison table.
    ///
    /// One row per requested name, caller order preserved. Empty attribute
    /// lists render as "N/A".
    ///
    /// # Errors
    ///
    /// Returns [`WaslaError::NotFound`] when any requested name is unknown.
    pub fn comparison_rows(&self, names: &[String]) -> Result<Vec<ComparisonRow>> {
        names
            .iter()
            .map(|name| {
                let segment = self.get(name)?;
                Ok(ComparisonRow::from_segment(segment))
            })
            .collect()
    }
}

impl Default for SegmentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One row of the segment comparison table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonRow {
    pub segment: String,
    pub age_range: String,
    pub primary_motivation: String,
    pub key_concern: String,
    pub top_platform: String,
    /// First two keywords joined by ", "
    pub main_keywords: String,
}

impl ComparisonRow {
    fn from_segment(segment: &AudienceSegment) -> Self {
        let first = |items: &[String]| {
            items
                .first()
                .cloned()
                .unwrap_or_else(|| "N/A".to_string())
        };
        let main_keywords = if segment.keywords.is_empty() {
            "N/A".to_string()
        } else {
            segment.keywords[..segment.keywords.len().min(2)].join(", ")
        };
        Self {
            segment: segment.name.clone(),
            age_range: segment.age_range.clone(),
            primary_motivation: first(&segment.motivations),
            key_concern: first(&segment.key_concerns),
            top_platform: first(&segment.platforms),
            main_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_deterministic() {
        let catalog = SegmentCatalog::builtin();
        for name in catalog.names().map(str::to_string).collect::<Vec<_>>() {
            let a = catalog.get(&name).unwrap();
            let b = catalog.get(&name).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_get_unknown_segment() {
        let catalog = SegmentCatalog::builtin();
        let err = catalog.get("Nonexistent Segment").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_names_follow_definition_order() {
        let catalog = SegmentCatalog::builtin();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names[0], "Iraqi Students Abroad");
        assert_eq!(names[1], "Iraqi Workers Abroad");
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut segments = builtin_segments();
        let dup = segments[0].clone();
        segments.push(dup);
        let err = SegmentCatalog::new(segments).unwrap_err();
        assert!(matches!(err, WaslaError::InvalidSegment(_)));
    }

    #[test]
    fn test_comparison_rows_preserve_order() {
        let catalog = SegmentCatalog::builtin();
        let names = vec![
            "Digital Entrepreneurs".to_string(),
            "Iraqi Students Abroad".to_string(),
        ];
        let rows = catalog.comparison_rows(&names).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].segment, "Digital Entrepreneurs");
        assert_eq!(rows[1].segment, "Iraqi Students Abroad");
        assert_eq!(rows[1].age_range, "17-35");
        assert_eq!(rows[1].primary_motivation, "Family fulfilling educational dreams");
        assert_eq!(rows[1].main_keywords, "Iraqi student, tuition remittance");
    }

    #[test]
    fn test_comparison_rows_unknown_name() {
        let catalog = SegmentCatalog::builtin();
        let err = catalog
            .comparison_rows(&["Nope".to_string()])
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
