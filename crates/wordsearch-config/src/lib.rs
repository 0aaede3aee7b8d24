use std::env;

use serde::{Deserialize, Serialize};

use self::client::ClientConfig;
use self::proxy::ProxyConfig;

pub mod client;
pub mod proxy;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("upstream lookup URL is not set (VITE_LAMBDA_FUNCTION_URL or WORDSEARCH_UPSTREAM_URL)")]
    MissingUpstreamUrl,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proxy: ProxyConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            proxy: ProxyConfig::from_lookup(&lookup),
            client: ClientConfig::from_lookup(&lookup),
        }
    }
}

/// Parse `key` with `FromStr`, falling back to `default` when unset or unparseable
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
