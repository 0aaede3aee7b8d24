use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_or};

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_upstream_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Lookup function the proxy forwards to
    pub upstream_url: Option<String>,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_upstream_timeout_seconds")]
    pub upstream_timeout_seconds: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream_url: None,
            bind_addr: default_bind_addr(),
            upstream_timeout_seconds: default_upstream_timeout_seconds(),
        }
    }
}

impl ProxyConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_url = lookup("VITE_LAMBDA_FUNCTION_URL")
            .or_else(|| lookup("WORDSEARCH_UPSTREAM_URL"))
            .filter(|url| !url.trim().is_empty());

        Self {
            upstream_url,
            bind_addr: lookup("PROXY_BIND_ADDR").unwrap_or_else(default_bind_addr),
            upstream_timeout_seconds: parse_or(
                lookup,
                "UPSTREAM_TIMEOUT_SECONDS",
                default_upstream_timeout_seconds(),
            ),
        }
    }

    pub fn upstream_url(&self) -> Result<&str, ConfigError> {
        self.upstream_url
            .as_deref()
            .ok_or(ConfigError::MissingUpstreamUrl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}
