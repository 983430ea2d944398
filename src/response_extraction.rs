//! # Response Extraction Module
//!
//! Language models wrap their JSON in prose and code fences. This module finds
//! the item payload inside such a reply. It is the only place that knows how
//! the payload is located, so a stricter structured-output mode can replace it
//! without touching the rest of the pipeline.

use log::{debug, trace};
use serde_json::Value;

use crate::parser_errors::ParserError;

/// Locate the JSON item payload in a free-form reply
///
/// Returns the outermost `[...]` span (first `[` to last `]`). Without one, the
/// first `{...}` span (first `{` to the next `}`) is wrapped as a one-element array.
pub fn extract_json_text(response: &str) -> Option<String> {
    let response = response.trim();

    if let (Some(start), Some(end)) = (response.find('['), response.rfind(']')) {
        if start < end {
            trace!("Extracted JSON array at {}..={}", start, end);
            return Some(response[start..=end].to_string());
        }
    }

    let start = response.find('{')?;
    let end = start + response[start..].find('}')?;
    trace!("Extracted single JSON object at {}..={}", start, end);
    Some(format!("[{}]", &response[start..=end]))
}

/// Extract and parse the item candidates from a model reply
///
/// # Errors
///
/// - `UnparsableRemoteResponse` when no JSON is found, it does not parse, or it is not an array
/// - `EmptyRemoteResult` when the array holds no items
///
/// # Examples
///
/// ```rust
/// use shopping_parser::response_extraction::extract_json_items;
///
/// let reply = "Sure! ```json\n[{\"name\":\"חלב\",\"quantity\":2}]\n```";
/// let items = extract_json_items(reply)?;
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0]["name"], "חלב");
/// # Ok::<(), shopping_parser::parser_errors::ParserError>(())
/// ```
pub fn extract_json_items(response: &str) -> Result<Vec<Value>, ParserError> {
    let json_text = extract_json_text(response).ok_or_else(|| {
        ParserError::UnparsableRemoteResponse(format!(
            "No JSON found in response | Raw: {}",
            truncate(response, 200)
        ))
    })?;

    let value: Value = serde_json::from_str(&json_text).map_err(|e| {
        ParserError::UnparsableRemoteResponse(format!(
            "Invalid JSON: {} | Raw: {}",
            e,
            truncate(&json_text, 200)
        ))
    })?;

    match value {
        Value::Array(items) if items.is_empty() => Err(ParserError::EmptyRemoteResult(
            "Response contained an empty array".to_string(),
        )),
        Value::Array(items) => {
            debug!("Extracted {} candidate items", items.len());
            Ok(items)
        }
        other => Err(ParserError::UnparsableRemoteResponse(format!(
            "Expected a JSON array, found {}",
            truncate(&other.to_string(), 200)
        ))),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
