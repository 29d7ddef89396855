// ABOUTME: Configuration loading for the tallybook server.
// ABOUTME: Reads TALLYBOOK_* environment variables and falls back to container-friendly defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "/app/data/expenses.json";
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TALLYBOOK_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct TallybookConfig {
    pub data_path: PathBuf,
    pub bind: SocketAddr,
    pub auth_token: Option<String>,
}

impl TallybookConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - TALLYBOOK_DATA_PATH: backing JSON file (default: /app/data/expenses.json)
    /// - TALLYBOOK_BIND: socket address to bind (default: 0.0.0.0:5000)
    /// - TALLYBOOK_AUTH_TOKEN: bearer token required on /api routes (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup("TALLYBOOK_DATA_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let bind_str = lookup("TALLYBOOK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let auth_token = lookup("TALLYBOOK_AUTH_TOKEN").filter(|t| !t.is_empty());

        Ok(Self {
            data_path,
            bind,
            auth_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<TallybookConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TallybookConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn config_loads_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.data_path, PathBuf::from("/app/data/expenses.json"));
        assert_eq!(config.bind, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn config_reads_overrides() {
        let config = load(&[
            ("TALLYBOOK_DATA_PATH", "/tmp/tally/records.json"),
            ("TALLYBOOK_BIND", "127.0.0.1:8080"),
            ("TALLYBOOK_AUTH_TOKEN", "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/tmp/tally/records.json"));
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.auth_token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn empty_token_is_treated_as_unset() {
        let config = load(&[("TALLYBOOK_AUTH_TOKEN", "")]).unwrap();
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn config_rejects_bad_bind() {
        let err = load(&[("TALLYBOOK_BIND", "not-an-address")]).unwrap_err();
        assert!(
            err.to_string().contains("TALLYBOOK_BIND"),
            "error should mention the variable: {}",
            err
        );
    }
}
