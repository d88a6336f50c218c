// src/core/config.rs

//! Runtime configuration.
//!
//! An optional `config.toml` under the project config directory can
//! override the request deadline and the User-Agent string; everything
//! else about the pipeline is fixed. A missing or malformed file falls
//! back to the defaults, never to an error.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Hard deadline for one content retrieval, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const DEFAULT_USER_AGENT: &str = "UrlGuardRS/0.1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Total per-request deadline. Applies to both the reachability fetch
    /// and the scanner's own retrieval.
    pub request_timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Loads the configuration from `config.toml` in the project config
    /// directory, falling back to defaults when the file is absent or
    /// unreadable.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Malformed config file, using defaults.");
                Self::default()
            }),
            Err(_) => {
                debug!(path = %path.display(), "No config file found, using defaults.");
                Self::default()
            }
        }
    }

    fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "urlguard-rs", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent, "UrlGuardRS/0.1");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = ScanConfig::parse("request_timeout_secs = 10\n").unwrap();
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.user_agent, "UrlGuardRS/0.1");
    }

    #[test]
    fn full_file_overrides_everything() {
        let raw = "request_timeout_secs = 2\nuser_agent = \"Probe/1.0\"\n";
        let config = ScanConfig::parse(raw).unwrap();
        assert_eq!(config.request_timeout_secs, 2);
        assert_eq!(config.user_agent, "Probe/1.0");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(ScanConfig::parse("request_timeout_secs = \"soon\"").is_err());
    }
}
