//! Client configuration, loaded from `tilewords.toml`.
//!
//! ```toml
//! [site]
//! origin = "https://play.example.com"
//!
//! [logging]
//! filter = "tilewords_client=debug"
//! ```
//!
//! Every section and key is optional.

use std::path::Path;

use serde::Deserialize;

/// Config loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host that shareable links are built on
    #[serde(default = "default_origin")]
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_origin() -> String {
    "http://localhost:3000".into()
}

fn default_filter() -> String {
    "info".into()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Absolute link for a path produced by the route helpers.
    pub fn share_link(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Install a fmt subscriber. `RUST_LOG` overrides the configured filter.
///
/// Returns false if a global subscriber was already set.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::get_lobby_path;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config.site.origin, "http://localhost:3000");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml_str(
            r#"
            [site]
            origin = "https://play.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(
            config.share_link(&get_lobby_path(Some(5))),
            "https://play.example.com/app/LobbyWait/lobby?lobbyId=5"
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = ClientConfig::from_toml_str("[site\norigin = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::load("/nonexistent/tilewords.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tilewords.toml"));
    }
}
