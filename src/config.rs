use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

pub mod env {
    pub const BIND: &str = "PAWSBOT_BIND";
    pub const UPSTREAM_URL: &str = "PAWSBOT_UPSTREAM_URL";
    pub const API_KEY: &str = "LOVABLE_API_KEY";
    pub const MODEL: &str = "PAWSBOT_MODEL";
    pub const UPSTREAM_TIMEOUT_SECS: &str = "PAWSBOT_UPSTREAM_TIMEOUT_SECS";
    pub const ADMIN_KEY: &str = "PAWSBOT_ADMIN_KEY";
    pub const RELAY_URL: &str = "PAWSBOT_RELAY_URL";
    pub const RELAY_API_KEY: &str = "PAWSBOT_RELAY_API_KEY";
}

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000/pawsbot-chat";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct RelayConfig {
    pub bind: SocketAddr,
    pub upstream_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub upstream_timeout: Duration,
    pub admin_key: Option<String>,
}

// Keys stay out of logs.
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("bind", &self.bind)
            .field("upstream_url", &self.upstream_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("model", &self.model)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("admin_key", &self.admin_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            admin_key: None,
        }
    }
}

impl RelayConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get(env::BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr { var: env::BIND, value: bind_raw.clone() })?;

        let upstream_timeout = match get(env::UPSTREAM_TIMEOUT_SECS) {
            Some(raw) => parse_secs(env::UPSTREAM_TIMEOUT_SECS, &raw)?,
            None => DEFAULT_UPSTREAM_TIMEOUT,
        };

        Ok(Self {
            bind,
            upstream_url: get(env::UPSTREAM_URL).unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            api_key: get(env::API_KEY),
            model: get(env::MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            upstream_timeout,
            admin_key: get(env::ADMIN_KEY),
        })
    }
}

fn parse_secs(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { var, value: raw.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let cfg = RelayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind.port(), 3000);
        assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
        assert!(cfg.api_key.is_none());
        assert!(cfg.admin_key.is_none());
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let cfg = RelayConfig::from_lookup(lookup(&[
            (env::BIND, "127.0.0.1:8080"),
            (env::API_KEY, "sk-test"),
            (env::UPSTREAM_TIMEOUT_SECS, "5"),
            (env::ADMIN_KEY, "  "),
        ]))
        .unwrap();
        assert_eq!(cfg.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
        assert!(cfg.admin_key.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            RelayConfig::from_lookup(lookup(&[(env::BIND, "nowhere")])),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            RelayConfig::from_lookup(lookup(&[(env::UPSTREAM_TIMEOUT_SECS, "0")])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn debug_hides_keys() {
        let cfg = RelayConfig {
            api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        assert!(!format!("{cfg:?}").contains("sk-secret"));
    }
}
