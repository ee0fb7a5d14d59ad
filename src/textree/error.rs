//! Error types for textree
//!
//! Parsing itself never fails: empty or unmatched input yields an empty or sparse tree.
//! Errors only surface at the boundaries (compiling rules, loading configuration or files,
//! and serializing a finished tree).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the decomposition engine.
#[derive(Error, Debug)]
pub enum TextreeError {
    #[error("invalid {rule} pattern `{pattern}`: {source}")]
    InvalidPattern {
        rule: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{rule} pattern `{pattern}` matches the empty string")]
    EmptyMatchPattern { rule: &'static str, pattern: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TextreeError {
    fn from(err: serde_json::Error) -> Self {
        TextreeError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for TextreeError {
    fn from(err: serde_yaml::Error) -> Self {
        TextreeError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TextreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_not_found_message() {
        let err = TextreeError::FormatNotFound("html".to_string());
        assert_eq!(err.to_string(), "format 'html' not found");
    }

    #[test]
    fn test_empty_match_message_names_rule() {
        let err = TextreeError::EmptyMatchPattern {
            rule: "word",
            pattern: r"\s*".to_string(),
        };
        assert!(err.to_string().starts_with("word pattern"));
    }
}
