// Configuration management from environment variables

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::errors::ServerError;

/// Runtime settings for the dashboard server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
    /// Fixed seed for the sample trend series. `None` draws from the thread RNG.
    pub trend_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
            trend_seed: None,
        }
    }
}

impl AppConfig {
    /// Creates configuration from environment variables with defaults.
    /// `main` loads `.env` into the environment before this runs.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            max_workers: parse_or("MAX_WORKERS", lookup("MAX_WORKERS"), defaults.max_workers),
            trend_seed: lookup("TREND_SEED").and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable TREND_SEED");
                    None
                }
            }),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::ConfigError(format!("invalid bind address: {e}")))
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "unparseable setting, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.trend_seed, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("MAX_WORKERS", "2"),
            ("TREND_SEED", "42"),
        ]));
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.max_workers, 2);
        assert_eq!(cfg.trend_seed, Some(42));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", "http"), ("TREND_SEED", "x")]));
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.trend_seed, None);
    }
}
