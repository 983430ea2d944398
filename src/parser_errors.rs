//! # Parser Error Types Module
//!
//! This module defines the error types raised by the remote extraction stage.
//! None of them reach callers of `TextItemParser::parse_item_text`: every
//! variant is recovered by the local fallback parser.

/// Custom error types for item parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParserError {
    /// Transport failure or non-success HTTP status from the completion service
    RemoteUnavailable(String),
    /// Reply contained no extractable JSON, invalid JSON, or a non-array value
    UnparsableRemoteResponse(String),
    /// Reply parsed but contained zero items
    EmptyRemoteResult(String),
    /// Missing API key, empty model list, or an unusable setting
    Configuration(String),
    /// Every configured model was tried without a usable reply
    AllModelsFailed {
        attempted: usize,
        last_error: Box<ParserError>,
    },
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserError::RemoteUnavailable(msg) => write!(f, "Remote service unavailable: {msg}"),
            ParserError::UnparsableRemoteResponse(msg) => {
                write!(f, "Unparsable remote response: {msg}")
            }
            ParserError::EmptyRemoteResult(msg) => write!(f, "Empty remote result: {msg}"),
            ParserError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            ParserError::AllModelsFailed {
                attempted,
                last_error,
            } => write!(f, "All {attempted} models failed, last error: {last_error}"),
        }
    }
}

impl std::error::Error for ParserError {}

impl From<reqwest::Error> for ParserError {
    fn from(err: reqwest::Error) -> Self {
        ParserError::RemoteUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for ParserError {
    fn from(err: serde_json::Error) -> Self {
        ParserError::UnparsableRemoteResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ParserError::RemoteUnavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Remote service unavailable: connection refused");

        let nested = ParserError::AllModelsFailed {
            attempted: 3,
            last_error: Box::new(ParserError::EmptyRemoteResult("gemini-1.5-pro".to_string())),
        };
        assert_eq!(
            nested.to_string(),
            "All 3 models failed, last error: Empty remote result: gemini-1.5-pro"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let err: ParserError = json_err.into();
        assert!(matches!(err, ParserError::UnparsableRemoteResponse(_)));
    }
}
