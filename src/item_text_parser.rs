//! # Text Item Parser
//!
//! Entry point for turning free text into shopping items. The language model
//! is tried first, one configured model at a time; if none yields usable items
//! the text is split and parsed locally.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shopping_parser::completion::GeminiClient;
//! use shopping_parser::item_text_parser::TextItemParser;
//! use shopping_parser::parser_config::ParserConfig;
//!
//! # async fn run() -> Result<(), shopping_parser::parser_errors::ParserError> {
//! let config = ParserConfig::from_env()?;
//! let client = Arc::new(GeminiClient::new(&config)?);
//! let parser = TextItemParser::new(client, config.models.clone());
//!
//! let items = parser.parse_item_text("עגבניות 3 ק״ג, חלב 2 ליטר").await;
//! for item in items {
//!     println!("{}", item);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::completion::CompletionService;
use crate::item_model::{ParseOutcome, ParseSource, ParsedItem};
use crate::local_parser::LocalItemParser;
use crate::normalization::normalize;
use crate::parser_errors::ParserError;
use crate::prompt::build_item_prompt;
use crate::response_extraction::extract_json_items;
use crate::synonym_tables::SynonymTables;

/// Free-text item parser with a remote-first, local-fallback chain
#[derive(Clone)]
pub struct TextItemParser {
    completion: Arc<dyn CompletionService>,
    models: Vec<String>,
    local: LocalItemParser,
}

impl TextItemParser {
    /// Create a parser that tries `models` in order against `completion`
    pub fn new(completion: Arc<dyn CompletionService>, models: Vec<String>) -> Self {
        Self {
            completion,
            models,
            local: LocalItemParser::new(),
        }
    }

    /// Replace the synonym tables used by the local fallback
    pub fn with_tables(mut self, tables: SynonymTables) -> Self {
        self.local = LocalItemParser::with_tables(tables);
        self
    }

    /// Parse free text into items, never failing
    ///
    /// Whitespace-only input yields an empty list without contacting the model.
    pub async fn parse_item_text(&self, text: &str) -> Vec<ParsedItem> {
        self.parse(text).await.items
    }

    /// Parse free text into items, reporting which stage produced them
    pub async fn parse(&self, text: &str) -> ParseOutcome {
        if text.trim().is_empty() {
            debug!("Empty input, nothing to parse");
            return ParseOutcome {
                items: Vec::new(),
                original_text: text.to_string(),
                source: ParseSource::LocalFallback,
            };
        }

        info!(text, "Parsing shopping text");

        match self.parse_via_remote(text).await {
            Ok((model, items)) => ParseOutcome {
                items,
                original_text: text.to_string(),
                source: ParseSource::Remote { model },
            },
            Err(e) => {
                warn!(error = %e, "Remote parsing failed, falling back to local parser");
                ParseOutcome {
                    items: self.local.parse_all(text),
                    original_text: text.to_string(),
                    source: ParseSource::LocalFallback,
                }
            }
        }
    }

    /// Ask each configured model in turn; the first usable reply wins
    ///
    /// Returns the model that answered together with its normalized items.
    pub async fn parse_via_remote(
        &self,
        text: &str,
    ) -> Result<(String, Vec<ParsedItem>), ParserError> {
        if self.models.is_empty() {
            return Err(ParserError::Configuration("No models configured".to_string()));
        }

        let prompt = build_item_prompt(text);
        let mut last_error = None;

        for model in &self.models {
            debug!(model = model.as_str(), "Trying model");
            match self.try_model(model, &prompt, text).await {
                Ok(items) => {
                    info!(model = model.as_str(), count = items.len(), "Parsed items remotely");
                    return Ok((model.clone(), items));
                }
                Err(e @ ParserError::Configuration(_)) => {
                    // No other model will fare better without credentials
                    return Err(e);
                }
                Err(e) => {
                    warn!(model = model.as_str(), error = %e, "Model failed");
                    last_error = Some(e);
                }
            }
        }

        Err(ParserError::AllModelsFailed {
            attempted: self.models.len(),
            last_error: Box::new(last_error.unwrap_or_else(|| {
                ParserError::Configuration("No models configured".to_string())
            })),
        })
    }

    async fn try_model(
        &self,
        model: &str,
        prompt: &str,
        text: &str,
    ) -> Result<Vec<ParsedItem>, ParserError> {
        let reply = self.completion.complete(model, prompt).await?;
        let candidates = extract_json_items(&reply)?;
        Ok(candidates
            .iter()
            .map(|candidate| normalize(candidate, text))
            .collect())
    }
}
