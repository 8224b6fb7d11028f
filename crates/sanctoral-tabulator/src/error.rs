//! Error types for the tabulator

use thiserror::Error;

/// Errors that can occur during tabulation
#[derive(Error, Debug)]
pub enum TabulatorError {
    /// Filesystem error on the JSON or CSV directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A day file exists but is not a JSON array of records
    #[error("invalid day file {0}: {1}")]
    Json(String, String),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid paging configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<csv::Error> for TabulatorError {
    fn from(e: csv::Error) -> Self {
        TabulatorError::Csv(e.to_string())
    }
}
