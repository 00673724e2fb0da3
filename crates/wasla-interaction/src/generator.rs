//! Text generation seam.
//!
//! The analysis service talks to the hosted model through this trait so the
//! orchestration logic can be exercised with stub generators in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use wasla_core::error::Result;

/// Per-call generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Maximum tokens the model may generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0-1.0)
    pub temperature: f32,
}

impl GenerationOptions {
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(512, 0.7)
    }
}

/// An opaque text-generation capability.
///
/// One prompt in, the provider's raw text out. Implementations map every
/// remote failure (network, auth, quota, malformed response) to
/// [`wasla_core::WaslaError::Generation`] with the provider's detail
/// preserved; no retry, no backoff.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}
