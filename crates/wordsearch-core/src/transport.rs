use wordsearch_types::LookupResult;

/// Sends a query to the lookup proxy and decodes its answer
#[async_trait::async_trait]
pub trait LookupTransport: Send + Sync {
    /// Post the raw query text, exactly as typed
    async fn search(&self, query: &str) -> Result<LookupResult, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    /// The proxy answered with its forwarding error envelope
    #[error("Proxy error: {0}")]
    Proxy(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}
