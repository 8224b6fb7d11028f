//! Configuration for the extractor

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the extractor
///
/// Defaults are the fixed paths and constants the batch has always used, so
/// a run with no overrides needs no flags at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Directory of `MM-DD.txt` source documents
    pub input_dir: PathBuf,

    /// Directory receiving one `MM-DD.json` per source document
    pub output_dir: PathBuf,

    /// Append-only JSON-lines log of unparseable model responses
    pub debug_log: PathBuf,

    /// Pause between documents, in seconds
    pub request_delay_secs: u64,
}

impl ExtractorConfig {
    /// Get the inter-document pause as a Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_dir.as_os_str().is_empty() {
            return Err("input_dir must not be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }
        if self.input_dir == self.output_dir {
            return Err("input_dir and output_dir must differ".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Hosted-backend defaults, including the rate-limit pause
    fn default() -> Self {
        Self::hosted()
    }
}

impl ExtractorConfig {
    /// Hosted preset: 6-second pause between documents to respect the
    /// hosted API's rate limits
    pub fn hosted() -> Self {
        Self {
            input_dir: PathBuf::from("./data/raw"),
            output_dir: PathBuf::from("./data/json"),
            debug_log: PathBuf::from("./data/debug_failed.jsonl"),
            request_delay_secs: 6,
        }
    }

    /// Local preset: no pause, the local server has no rate limit
    pub fn local() -> Self {
        Self {
            request_delay_secs: 0,
            ..Self::hosted()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("failed to serialize to TOML: {}", e))
    }
}
