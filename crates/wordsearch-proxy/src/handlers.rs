use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::Instrument;
use uuid::Uuid;

use crate::ProxyState;

/// Body returned whenever forwarding fails, whatever the cause
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: u16,
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn word_search(State(state): State<ProxyState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("word_search", %request_id);

    async move {
        tracing::debug!("[PROXY] forwarding {} bytes", body.len());

        match state.forwarder.forward(body).await {
            Ok(reply) => {
                tracing::debug!("[PROXY] upstream replied with {} bytes", reply.body.len());
                ([(header::CONTENT_TYPE, reply.content_type)], reply.body).into_response()
            }
            Err(e) => {
                tracing::error!("[PROXY] forwarding failed: {e}");
                Json(ErrorEnvelope {
                    error: e.to_string(),
                    status: 500,
                })
                .into_response()
            }
        }
    }
    .instrument(span)
    .await
}
