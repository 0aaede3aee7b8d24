use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub mod forward;
pub mod handlers;

pub use forward::{ForwardError, Forwarder, UpstreamReply};

pub const WORD_SEARCH_ROUTE: &str = "/api/v1/search/wordsearch";

#[derive(Clone)]
pub struct ProxyState {
    pub forwarder: Arc<Forwarder>,
}

impl ProxyState {
    pub fn new(forwarder: Forwarder) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
        }
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(WORD_SEARCH_ROUTE, post(handlers::word_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
