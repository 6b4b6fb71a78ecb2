//! Server configuration, populated from environment variables.

use std::net::SocketAddr;

use hubspec_api::{DocOptions, DEFAULT_SERVER_URL};

/// Runtime configuration for the docs server and mock hub.
///
/// All fields are populated from environment variables with defaults, so the
/// server can be started with zero configuration.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `HUBSPEC_BIND` | `0.0.0.0:3000` | TCP socket address to listen on |
/// | `HUBSPEC_SERVER_URL` | `https://hubs.dev.airstack.xyz` | Comma-separated `servers[]` entries of the document |
/// | `HUBSPEC_MOCK_HUB` | `false` | Mount the in-memory mock hub under `/v1/` |
/// | `HUBSPEC_API_KEYS` | (absent = any non-empty key) | Comma-separated keys accepted in `x-airstack-hubs` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Base URLs advertised under `servers` in the OpenAPI document.
    pub servers: Vec<String>,

    /// Whether the mock hub routes are mounted.
    pub mock_hub: bool,

    /// Accepted API keys. Empty means any non-empty key is accepted.
    pub api_keys: Vec<String>,
}

/// A configuration variable held a value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            servers: vec![DEFAULT_SERVER_URL.to_string()],
            mock_hub: false,
            api_keys: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("HUBSPEC_BIND") {
            Some(raw) => raw.parse().map_err(|_| ConfigError {
                var: "HUBSPEC_BIND",
                expected: "a socket address (e.g. 0.0.0.0:3000)",
                value: raw,
            })?,
            None => defaults.bind_addr,
        };

        let servers = lookup("HUBSPEC_SERVER_URL")
            .map(|raw| split_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.servers);

        let mock_hub = match lookup("HUBSPEC_MOCK_HUB") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError {
                var: "HUBSPEC_MOCK_HUB",
                expected: "true or false",
                value: raw,
            })?,
            None => defaults.mock_hub,
        };

        let api_keys = lookup("HUBSPEC_API_KEYS")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            servers,
            mock_hub,
            api_keys,
        })
    }

    /// Options for the served OpenAPI document.
    pub fn doc_options(&self) -> DocOptions {
        DocOptions {
            servers: self.servers.clone(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.servers, vec![DEFAULT_SERVER_URL.to_string()]);
        assert!(!cfg.mock_hub);
        assert!(cfg.api_keys.is_empty());
    }

    #[test]
    fn lists_are_comma_separated() {
        let cfg = config(&[
            ("HUBSPEC_SERVER_URL", "https://a.example, https://b.example"),
            ("HUBSPEC_API_KEYS", "k1,,k2"),
            ("HUBSPEC_MOCK_HUB", "TRUE"),
        ])
        .unwrap();
        assert_eq!(cfg.servers, vec!["https://a.example", "https://b.example"]);
        assert_eq!(cfg.api_keys, vec!["k1", "k2"]);
        assert!(cfg.mock_hub);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = config(&[("HUBSPEC_BIND", "localhost")]).unwrap_err();
        assert_eq!(err.var, "HUBSPEC_BIND");
        let err = config(&[("HUBSPEC_MOCK_HUB", "maybe")]).unwrap_err();
        assert_eq!(err.var, "HUBSPEC_MOCK_HUB");
    }
}
