//! Player configuration loaded from the environment
//!
//! - `URL`: websocket server URL (`ws://` or `wss://`)
//! - `KEY`: API key, sent as the `key` query parameter
//!
//! `.env.local` and `.env` in the working directory are loaded first when
//! present; variables already set in the process take precedence.

use std::fmt;
use std::path::Path;

use url::Url;

/// Environment variable holding the server URL
pub const URL_VAR: &str = "URL";
/// Environment variable holding the API key
pub const KEY_VAR: &str = "KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid server URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{0}', expected ws or wss")]
    UnsupportedScheme(String),

    #[error("wss:// requires the `tls` feature")]
    TlsDisabled,
}

/// Where to connect and how to authenticate
#[derive(Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    server_url: Url,
    api_key: String,
}

impl PlayerConfig {
    pub fn new(server_url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::Missing(KEY_VAR));
        }

        let server_url = Url::parse(server_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        match server_url.scheme() {
            "ws" => {}
            "wss" if cfg!(feature = "tls") => {}
            "wss" => return Err(ConfigError::TlsDisabled),
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            server_url,
            api_key,
        })
    }

    /// Read `URL` and `KEY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read `URL` and `KEY` through `lookup`; empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let url = read(URL_VAR)?;
        let key = read(KEY_VAR)?;
        Self::new(&url, key)
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    /// Server URL with the API key appended as `key` query parameter.
    pub fn endpoint(&self) -> Url {
        let mut url = self.server_url.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

// Keep the key out of logs
impl fmt::Debug for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerConfig")
            .field("server_url", &self.server_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Load `.env.local` then `.env` from the working directory, if present.
pub fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = Path::new(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(path) {
                tracing::warn!(file = filename, error = %e, "Failed to load env file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_endpoint_appends_key_query() {
        let config =
            PlayerConfig::from_lookup(lookup(&[("URL", "ws://example.org/spe_ed"), ("KEY", "abc")]))
                .unwrap();
        assert_eq!(
            config.endpoint().as_str(),
            "ws://example.org/spe_ed?key=abc"
        );
        assert_eq!(config.server_url().as_str(), "ws://example.org/spe_ed");
    }

    #[test]
    fn test_endpoint_encodes_key() {
        let config = PlayerConfig::new("ws://localhost:8081", "a b&c").unwrap();
        let endpoint = config.endpoint();
        let pairs: Vec<(String, String)> = endpoint
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("key".to_string(), "a b&c".to_string())]);
    }

    #[test]
    fn test_missing_url() {
        let err = PlayerConfig::from_lookup(lookup(&[("KEY", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("URL")));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let err = PlayerConfig::from_lookup(lookup(&[("URL", "ws://localhost"), ("KEY", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("KEY")));
    }

    #[test]
    fn test_rejects_non_websocket_url() {
        let err = PlayerConfig::new("http://localhost", "abc").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(s) if s == "http"));

        let err = PlayerConfig::new("not a url", "abc").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    #[cfg(feature = "tls")]
    fn test_accepts_wss_with_tls() {
        let config = PlayerConfig::new("wss://msoll.de/spe_ed", "abc").unwrap();
        assert_eq!(config.server_url().scheme(), "wss");
    }

    #[test]
    #[cfg(not(feature = "tls"))]
    fn test_rejects_wss_without_tls() {
        let err = PlayerConfig::new("wss://msoll.de/spe_ed", "abc").unwrap_err();
        assert!(matches!(err, ConfigError::TlsDisabled));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = PlayerConfig::new("ws://localhost", "secret-key").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("localhost"));
    }
}
