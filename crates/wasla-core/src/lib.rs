pub mod analysis;
pub mod error;
pub mod segment;

// Re-export common error type
pub use error::WaslaError;

pub use analysis::{AnalysisMode, AnalysisRequest, SegmentAnalysis, sample_posts};
pub use segment::{AudienceSegment, ComparisonRow, SegmentCatalog};
