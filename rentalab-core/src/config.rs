//! Runtime configuration, loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// The published sheet this dashboard was built for.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRtdfgZGMkk10_R_8pFbH2_qbRsFB1JyltIq3t-hJqfEGKJhXMCbjH3Xh0z12AkMgZkRXYt7rLclJ44/pub?gid=0&single=true&output=csv";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// CSV export URL of the published sheet.
    pub url: String,
    /// HTTP timeout for the single fetch attempt.
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SHEET_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// Defaults when the file does not exist; a present-but-broken file is
    /// still an error, not silently ignored.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_published_sheet() {
        let config = AppConfig::default();
        assert_eq!(config.feed.url, DEFAULT_SHEET_URL);
        assert_eq!(config.feed.timeout_secs, 30);
    }

    #[test]
    fn partial_toml_fills_the_rest_from_defaults() {
        let config = AppConfig::from_toml("[feed]\nurl = \"https://example.com/feed.csv\"\n")
            .unwrap();
        assert_eq!(config.feed.url, "https://example.com/feed.csv");
        assert_eq!(config.feed.timeout_secs, 30);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml("[feed\nurl = 3").is_err());
    }
}
