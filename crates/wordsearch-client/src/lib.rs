use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use wordsearch_config::client::ClientConfig;
use wordsearch_core::transport::{LookupTransport, TransportError};
use wordsearch_types::LookupResult;

/// Talks to the word search route of the lookup proxy
#[derive(Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(map_reqwest_error)?;

        Ok(Self::with_client(client, config.proxy_url.clone()))
    }

    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LookupTransport for ProxyClient {
    async fn search(&self, query: &str) -> Result<LookupResult, TransportError> {
        tracing::debug!("[SEARCH] POST {} ({} bytes)", self.endpoint, query.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(query.to_owned())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[SEARCH] proxy answered HTTP {}", status);
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<LookupResult>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_decode() {
        TransportError::Decode(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}
