//! Audience segment domain.
//!
//! Segments describe the predefined Iraqi remittance audiences the analysis
//! operations target. The catalog is built once at startup from the preset
//! data and injected wherever lookups are needed.

pub mod catalog;
pub mod model;
pub mod preset;

pub use catalog::{ComparisonRow, SegmentCatalog};
pub use model::AudienceSegment;
pub use preset::builtin_segments;
