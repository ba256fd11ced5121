use std::net::IpAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::auth::ApiToken;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_TOKEN must be set to a non-empty value")]
    MissingToken,

    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `API_TOKEN` has a default suitable for local use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Secret bearer token (required).
    pub api_token: ApiToken,
    /// Optional dataset file; the bundled dataset is used when unset.
    pub movies_data_file: Option<PathBuf>,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `API_TOKEN`            | (required) |
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `8000`     |
    /// | `MOVIES_DATA_FILE`     | bundled    |
    /// | `CORS_ORIGINS`         | any origin |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_token = lookup("API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .map(ApiToken::new)
            .ok_or(ConfigError::MissingToken)?;

        let host = parse_or(&lookup, "HOST", "an IP address", "0.0.0.0".parse().ok())?;
        let port = parse_or(&lookup, "PORT", "a valid u16", Some(8000))?;
        let request_timeout_secs =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", "a valid u64", Some(30))?;

        let movies_data_file = lookup("MOVIES_DATA_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            api_token,
            movies_data_file,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    let invalid = |value: String| ConfigError::Invalid {
        var,
        expected,
        value,
    };
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|_| invalid(raw)),
        None => default.ok_or_else(|| invalid(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("API_TOKEN", "abc")]).unwrap();

        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.movies_data_file.is_none());
        assert!(config.cors_origins.is_empty());
        assert!(config.api_token.matches("abc"));
    }

    #[test]
    fn test_token_is_required() {
        assert!(matches!(config_from(&[]), Err(ConfigError::MissingToken)));
        assert!(matches!(
            config_from(&[("API_TOKEN", "  ")]),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("API_TOKEN", "abc"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("MOVIES_DATA_FILE", "/srv/movies.json"),
            ("CORS_ORIGINS", "http://localhost:3000, https://example.com"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.movies_data_file, Some(PathBuf::from("/srv/movies.json")));
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[1], "https://example.com");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_port_names_variable() {
        let err = config_from(&[("API_TOKEN", "abc"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a valid u16, got \"eighty\"");
    }
}
