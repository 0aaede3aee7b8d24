use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use wordsearch_config::ConfigError;
use wordsearch_config::proxy::ProxyConfig;

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("Upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build upstream HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Successful upstream answer, relayed untouched
#[derive(Debug)]
pub struct UpstreamReply {
    pub content_type: HeaderValue,
    pub body: Bytes,
}

/// Relays query bodies to the configured lookup function
pub struct Forwarder {
    client: reqwest::Client,
    upstream_url: String,
}

impl Forwarder {
    pub fn new(client: reqwest::Client, upstream_url: impl Into<String>) -> Self {
        Self {
            client,
            upstream_url: upstream_url.into(),
        }
    }

    pub fn from_config(config: &ProxyConfig) -> Result<Self, ForwardError> {
        let upstream_url = config.upstream_url()?.to_string();
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()
            .map_err(ForwardError::Client)?;

        Ok(Self::new(client, upstream_url))
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// POST `body` upstream as `text/plain` and hand back the raw reply
    pub async fn forward(&self, body: Bytes) -> Result<UpstreamReply, ForwardError> {
        let response = self
            .client
            .post(&self.upstream_url)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        let body = response.bytes().await?;

        Ok(UpstreamReply { content_type, body })
    }
}
