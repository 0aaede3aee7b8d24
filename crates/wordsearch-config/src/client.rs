use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::parse_or;

fn default_proxy_url() -> String {
    "http://localhost:3000/api/v1/search/wordsearch".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full URL of the proxy's word search route
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    /// Drop responses that resolve after a newer search or a clear
    pub discard_stale_responses: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            discard_stale_responses: false,
        }
    }
}

impl ClientConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            proxy_url: lookup("WORDSEARCH_PROXY_URL").unwrap_or_else(default_proxy_url),
            request_timeout_seconds: parse_or(
                lookup,
                "REQUEST_TIMEOUT_SECONDS",
                default_request_timeout_seconds(),
            ),
            discard_stale_responses: parse_or(lookup, "DISCARD_STALE_RESPONSES", false),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
