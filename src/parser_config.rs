//! # Parser Configuration Module
//!
//! This module defines configuration for the remote extraction stage: which
//! models to try and in what order, where the completion service lives, and
//! how long a single request may take.

use std::time::Duration;

use crate::parser_errors::ParserError;

// Models to try in order; the first usable reply wins
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-2.0-flash",
    "gemini-2.5-flash-preview-04-17",
    "gemini-2.5-pro-preview-03-25",
    "gemini-2.0-flash-lite",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-1.5-flash-8b",
    "gemma-3-1b-it",
    "gemma-3-4b-it",
    "gemma-3-12b-it",
    "gemma-3-27b-it",
    "gemma-2-2b-it",
    "gemma-2-9b-it",
    "gemma-2-27b-it",
];
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODELS_VAR: &str = "GEMINI_MODELS";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

/// Configuration for the remote extraction stage
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// API key for the completion service; without one the remote stage is skipped
    pub api_key: Option<String>,
    /// Model identifiers in priority order
    pub models: Vec<String>,
    /// Base URL of the completion service
    pub base_url: String,
    /// Timeout for a single completion request in seconds
    pub request_timeout_secs: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ParserConfig {
    /// Build configuration from process environment variables
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ParserError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shopping_parser::parser_config::ParserConfig;
    ///
    /// let config = ParserConfig::from_lookup(|key| match key {
    ///     "GEMINI_MODELS" => Some("gemini-2.0-flash, gemma-3-4b-it".to_string()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(config.models, vec!["gemini-2.0-flash", "gemma-3-4b-it"]);
    /// assert!(config.api_key.is_none());
    /// # Ok::<(), shopping_parser::parser_errors::ParserError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ParserError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let mut config = Self {
            api_key,
            ..Self::default()
        };

        if let Some(models) = lookup(MODELS_VAR) {
            let models: Vec<String> = models
                .split(',')
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .map(|m| m.to_string())
                .collect();
            if models.is_empty() {
                return Err(ParserError::Configuration(format!(
                    "{MODELS_VAR} is set but lists no models"
                )));
            }
            config.models = models;
        }

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            config.request_timeout_secs = timeout.trim().parse().map_err(|_| {
                ParserError::Configuration(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got '{timeout}'"
                ))
            })?;
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
