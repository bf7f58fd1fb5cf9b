//! Request types for the expense engine API.
//!
//! This module defines the JSON request structures for the `/parse` and
//! `/statement` endpoints.

use serde::{Deserialize, Serialize};

use crate::render::OutputFormat;

/// Request body for the `/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The pasted trip report text.
    pub text: String,
}

/// Request body for the `/statement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The pasted trip report text.
    pub text: String,
    /// The employee whose statement to render, without honorific.
    pub employee: String,
    /// The output format. Defaults to the text statement.
    #[serde(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_deserialization() {
        let request: ParseRequest = serde_json::from_str(r#"{"text": "田中様\n1/5 A→B"}"#).unwrap();
        assert_eq!(request.text, "田中様\n1/5 A→B");
    }

    #[test]
    fn test_statement_request_default_format() {
        let request: StatementRequest =
            serde_json::from_str(r#"{"text": "x", "employee": "田中"}"#).unwrap();
        assert_eq!(request.format, OutputFormat::Text);
    }

    #[test]
    fn test_statement_request_explicit_format() {
        let request: StatementRequest =
            serde_json::from_str(r#"{"text": "x", "employee": "田中", "format": "json"}"#)
                .unwrap();
        assert_eq!(request.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_text_rejected() {
        let result: Result<ParseRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
