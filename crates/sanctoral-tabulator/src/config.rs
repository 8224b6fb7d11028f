//! Configuration for the tabulator

use crate::page::DEFAULT_ROWS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the tabulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabulatorConfig {
    /// Directory of `MM-DD.json` extraction files
    pub json_dir: PathBuf,

    /// Directory receiving the numbered CSV pages
    pub csv_dir: PathBuf,

    /// Data rows per CSV page
    pub rows_per_page: usize,
}

impl TabulatorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.rows_per_page == 0 {
            return Err("rows_per_page must be greater than 0".to_string());
        }
        if self.json_dir == self.csv_dir {
            return Err("json_dir and csv_dir must differ".to_string());
        }
        Ok(())
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

impl Default for TabulatorConfig {
    fn default() -> Self {
        Self {
            json_dir: PathBuf::from("./data/json"),
            csv_dir: PathBuf::from("./data/csv"),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TabulatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows_per_page, 298);
    }

    #[test]
    fn test_zero_rows_per_page_is_invalid() {
        let mut config = TabulatorConfig::default();
        config.rows_per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TabulatorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = TabulatorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.json_dir, parsed.json_dir);
        assert_eq!(config.csv_dir, parsed.csv_dir);
        assert_eq!(config.rows_per_page, parsed.rows_per_page);
    }
}
