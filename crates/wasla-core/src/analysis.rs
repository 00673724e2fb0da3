//! Analysis request/result model.
//!
//! An [`AnalysisRequest`] is ephemeral: built per user action, never
//! persisted. Results are tagged per segment so a failed generation for one
//! segment never hides the others.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::WaslaError;

/// The kind of analysis to run against the selected segments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    /// How would each segment react to the content?
    Reaction,
    /// Rewrite the content to better appeal to the selected segments
    Enhancement,
    /// Produce an Iraqi Arabic dialect version per segment
    ArabicAdaptation,
}

impl AnalysisMode {
    /// True when the mode runs one generation per selected segment.
    pub fn is_per_segment(self) -> bool {
        matches!(self, Self::Reaction | Self::ArabicAdaptation)
    }
}

/// A single analysis run: content, segment selection, and mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The social media copy to analyze (must be non-empty)
    pub content: String,
    /// Ordered, non-empty list of segment names from the catalog
    pub segments: Vec<String>,
    pub mode: AnalysisMode,
}

impl AnalysisRequest {
    pub fn new(content: impl Into<String>, segments: Vec<String>, mode: AnalysisMode) -> Self {
        Self {
            content: content.into(),
            segments,
            mode,
        }
    }
}

/// Outcome of one generation, tagged with the segment(s) it covers.
///
/// For per-segment modes there is one entry per selected segment; for
/// enhancement a single entry covers the whole selection.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentAnalysis {
    pub segment: String,
    pub result: Result<String, WaslaError>,
}

impl SegmentAnalysis {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Sample bilingual posts shipped for quick experimentation.
pub fn sample_posts() -> &'static [&'static str] {
    &[
        "أرسل فلوس لأهلك بالعراق بسرعة وأمان! رسوم قليلة للطلاب. Send money home instantly! 🇮🇶💙",
        "Support your family back home while building your future abroad. Fast, secure, affordable. 🏠❤️",
        "من العراق للعالم - نربط المسافات بكل حوالة. From Iraq to the world - bridging distances. 🌍",
        "Your success abroad means everything to family back home. Quick remittances for Iraqis worldwide. 🎓",
        "Pay suppliers instantly. Grow your business. Iraq to global markets made simple. 💼🚀",
        "Freelancers - get paid faster from international clients. USD to IQD in minutes. 💻💰",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_round_trips_through_strings() {
        assert_eq!(AnalysisMode::Reaction.to_string(), "reaction");
        assert_eq!(AnalysisMode::ArabicAdaptation.to_string(), "arabic-adaptation");
        assert_eq!(
            AnalysisMode::from_str("enhancement").unwrap(),
            AnalysisMode::Enhancement
        );
        assert!(AnalysisMode::from_str("unknown-mode").is_err());
    }

    #[test]
    fn test_per_segment_modes() {
        assert!(AnalysisMode::Reaction.is_per_segment());
        assert!(AnalysisMode::ArabicAdaptation.is_per_segment());
        assert!(!AnalysisMode::Enhancement.is_per_segment());
    }

    #[test]
    fn test_sample_posts_available() {
        assert_eq!(sample_posts().len(), 6);
        assert!(sample_posts()[0].contains("Send money home instantly!"));
    }
}
