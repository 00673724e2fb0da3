//! OpenAiGenerator - Direct REST API implementation for OpenAI GPT.
//!
//! Calls the OpenAI Chat Completions API directly. Configuration comes from
//! the constructor or environment variables (OPENAI_API_KEY, WASLA_MODEL).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

use crate::generator::{GenerationOptions, TextGenerator};
use wasla_core::error::{Result, WaslaError};

const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Generator implementation that talks to the OpenAI HTTP API.
#[derive(Clone, Debug)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    /// Creates a new generator with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `WASLA_MODEL` overrides the default
    /// `gpt-4` model.
    pub fn try_from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| WaslaError::config("OPENAI_API_KEY not found in environment variables"))?;
        if api_key.trim().is_empty() {
            return Err(WaslaError::config("OPENAI_API_KEY is empty"));
        }

        let model = env::var("WASLA_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| WaslaError::generation(format!("OpenAI API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            WaslaError::generation(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(WaslaError::invalid_request("prompt must not be empty"));
        }

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        tracing::debug!(
            model = %self.model,
            max_tokens = options.max_tokens,
            temperature = options.temperature,
            "sending chat completion request"
        );

        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| WaslaError::generation("OpenAI API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> WaslaError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    WaslaError::generation(format!("OpenAI API returned {status}: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            max_tokens: 700,
            temperature: 0.7,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 700);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_map_http_error_extracts_provider_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": null}}"#;
        let err = map_http_error(StatusCode::UNAUTHORIZED, body.to_string());
        assert!(err.is_generation());
        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream unavailable".to_string());
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn test_extract_text_response_empty_choices() {
        let response = ChatCompletionResponse { choices: vec![] };
        let err = extract_text_response(response).unwrap_err();
        assert!(err.is_generation());
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let generator = OpenAiGenerator::new("test-key", "gpt-4");
        let err = generator
            .generate("   ", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_try_from_env_requires_key() {
        // Isolate from ambient environment
        unsafe {
            env::remove_var("OPENAI_API_KEY");
        }
        let err = OpenAiGenerator::try_from_env().unwrap_err();
        assert!(matches!(err, WaslaError::Config(_)));
    }
}
