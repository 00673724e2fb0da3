//! Analysis Service
//!
//! Orchestrates the three analysis operations: looks up segment descriptors,
//! builds the instruction text, and runs generations through the injected
//! [`TextGenerator`]. Per-segment modes fan out concurrently with one result
//! slot per segment, so a failed generation never hides its siblings.

use std::sync::Arc;

use futures::future::join_all;

use wasla_core::analysis::{AnalysisMode, AnalysisRequest, SegmentAnalysis};
use wasla_core::error::{Result, WaslaError};
use wasla_core::segment::SegmentCatalog;
use wasla_interaction::generator::{GenerationOptions, TextGenerator};
use wasla_interaction::prompts;

/// Output budget and sampling per operation. The budgets differ because the
/// section contracts differ in length; temperature stays moderate so the
/// marketing analysis reads naturally instead of deterministically.
const REACTION_OPTIONS: GenerationOptions = GenerationOptions::new(700, 0.7);
const ENHANCEMENT_OPTIONS: GenerationOptions = GenerationOptions::new(800, 0.7);
const ADAPTATION_OPTIONS: GenerationOptions = GenerationOptions::new(600, 0.7);

/// Service running segment-targeted content analyses.
pub struct AnalysisService {
    catalog: Arc<SegmentCatalog>,
    generator: Arc<dyn TextGenerator>,
}

impl AnalysisService {
    pub fn new(catalog: Arc<SegmentCatalog>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }

    /// The injected segment catalog, for display and comparison rendering.
    pub fn catalog(&self) -> &SegmentCatalog {
        &self.catalog
    }

    /// Analyzes how one segment would react to the content.
    ///
    /// Returns the provider's text verbatim on success.
    pub async fn reaction_analysis(&self, segment: &str, content: &str) -> Result<String> {
        validate_content(content)?;
        let descriptor = self.catalog.get(segment)?;
        let prompt = prompts::reaction_prompt(descriptor, content);

        tracing::debug!(segment, "running reaction analysis");
        self.generator.generate(&prompt, &REACTION_OPTIONS).await
    }

    /// Rewrites the content to better appeal to the selected segments.
    ///
    /// One generation covers the whole selection, caller order preserved in
    /// the prompt.
    pub async fn content_enhancement(&self, segments: &[String], content: &str) -> Result<String> {
        validate_content(content)?;
        if segments.is_empty() {
            return Err(WaslaError::invalid_request(
                "at least one segment must be selected",
            ));
        }
        let descriptors = segments
            .iter()
            .map(|name| self.catalog.get(name))
            .collect::<Result<Vec<_>>>()?;
        let prompt = prompts::enhancement_prompt(&descriptors, content);

        tracing::debug!(segment_count = segments.len(), "running content enhancement");
        self.generator.generate(&prompt, &ENHANCEMENT_OPTIONS).await
    }

    /// Produces an Iraqi Arabic dialect version of the content for one
    /// segment.
    pub async fn arabic_adaptation(&self, segment: &str, content: &str) -> Result<String> {
        validate_content(content)?;
        let descriptor = self.catalog.get(segment)?;
        let prompt = prompts::arabic_prompt(descriptor, content);

        tracing::debug!(segment, "running Iraqi Arabic adaptation");
        self.generator.generate(&prompt, &ADAPTATION_OPTIONS).await
    }

    /// Runs a full analysis request, dispatching on mode.
    ///
    /// Preconditions are checked up front: non-empty content, non-empty
    /// segment selection, and every selected segment present in the catalog.
    /// A request naming an unknown segment fails before any generation is
    /// attempted.
    ///
    /// Per-segment modes run their generations concurrently; each segment's
    /// failure is captured in its own [`SegmentAnalysis`] entry and the
    /// request order is preserved. Enhancement returns a single entry whose
    /// `segment` field joins the selected names.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Vec<SegmentAnalysis>> {
        self.validate(request)?;

        tracing::info!(
            mode = %request.mode,
            segments = request.segments.len(),
            "starting analysis"
        );

        match request.mode {
            AnalysisMode::Enhancement => {
                let result = self
                    .content_enhancement(&request.segments, &request.content)
                    .await;
                Ok(vec![SegmentAnalysis {
                    segment: request.segments.join(", "),
                    result,
                }])
            }
            AnalysisMode::Reaction | AnalysisMode::ArabicAdaptation => {
                let runs = request.segments.iter().map(|name| async {
                    let result = match request.mode {
                        AnalysisMode::Reaction => {
                            self.reaction_analysis(name, &request.content).await
                        }
                        _ => self.arabic_adaptation(name, &request.content).await,
                    };
                    SegmentAnalysis {
                        segment: name.clone(),
                        result,
                    }
                });
                Ok(join_all(runs).await)
            }
        }
    }

    fn validate(&self, request: &AnalysisRequest) -> Result<()> {
        validate_content(&request.content)?;
        if request.segments.is_empty() {
            return Err(WaslaError::invalid_request(
                "at least one segment must be selected",
            ));
        }
        for name in &request.segments {
            self.catalog.get(name)?;
        }
        Ok(())
    }
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(WaslaError::invalid_request("content must not be empty"));
    }
    Ok(())
}
