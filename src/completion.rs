//! # Completion Service Module
//!
//! The language model is consumed as a plain request/response call: a model
//! identifier plus prompt text in, free-form reply text out. `CompletionService`
//! is the seam; `GeminiClient` talks to Google's Generative Language REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::parser_config::ParserConfig;
use crate::parser_errors::ParserError;

/// A text completion backend
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` to `model` and return the reply text
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ParserError>;
}

/// HTTP client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client from parser configuration
    pub fn new(config: &ParserConfig) -> Result<Self, ParserError> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ParserError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then(|| text.trim().to_string())
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ParserError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ParserError::Configuration("GEMINI_API_KEY is not set".to_string()))?;

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(model, %status, "Completion request rejected");
            return Err(ParserError::RemoteUnavailable(format!(
                "{model} returned HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body.text().ok_or_else(|| {
            ParserError::UnparsableRemoteResponse(format!("{model} returned no text"))
        })?;

        debug!(model, response = %text, "Raw completion response");
        Ok(text)
    }
}
