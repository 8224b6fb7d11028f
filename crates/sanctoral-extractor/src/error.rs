//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM backend error; fatal for the whole run
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model output that is not a JSON array of records
    #[error("invalid model output: {0}")]
    InvalidFormat(String),

    /// Filesystem error on the input or output directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::InvalidFormat(e.to_string())
    }
}
