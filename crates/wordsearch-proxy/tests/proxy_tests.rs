use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_string, header as header_eq, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordsearch_proxy::handlers::ErrorEnvelope;
use wordsearch_config::ConfigError;
use wordsearch_config::proxy::ProxyConfig;
use wordsearch_proxy::{ForwardError, Forwarder, ProxyState, WORD_SEARCH_ROUTE, router};

fn app_for(upstream_url: String) -> axum::Router {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    router(ProxyState::new(Forwarder::new(client, upstream_url)))
}

fn search_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(WORD_SEARCH_ROUTE)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body))
        .unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_forwards_body_verbatim_and_relays_reply_unchanged() {
    let upstream = MockServer::start().await;
    // Odd spacing and key order must survive the round trip
    let reply = r#"{"WordSearchResponses":[{"word":"hello","meanings":[],"phonetics":[]}],  "StatusCode":200}"#;
    Mock::given(method("POST"))
        .and(header_eq("content-type", "text/plain"))
        .and(body_string(" hello\n"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(reply, "application/json"))
        .expect(1)
        .mount(&upstream)
        .await;

    let response = app_for(upstream.uri())
        .oneshot(search_request(" hello\n"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(read_body(response).await, reply.as_bytes());
}

#[tokio::test]
async fn test_rate_limit_payload_is_passed_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"StatusCode": 429, "Message": "Too many requests"})),
        )
        .mount(&upstream)
        .await;

    let response = app_for(upstream.uri())
        .oneshot(search_request("test"))
        .await
        .unwrap();

    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["StatusCode"], 429);
    assert_eq!(body["Message"], "Too many requests");
}

#[tokio::test]
async fn test_upstream_error_status_becomes_envelope() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .mount(&upstream)
        .await;

    let response = app_for(upstream.uri())
        .oneshot(search_request("hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let envelope: ErrorEnvelope = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(envelope.status, 500);
    assert!(envelope.error.contains("404"), "{}", envelope.error);
}

#[tokio::test]
async fn test_unreachable_upstream_becomes_envelope() {
    let response = app_for("http://127.0.0.1:9/lookup".to_string())
        .oneshot(search_request("hello"))
        .await
        .unwrap();

    let envelope: ErrorEnvelope = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(envelope.status, 500);
    assert!(!envelope.error.is_empty());
}

#[tokio::test]
async fn test_slow_upstream_becomes_envelope() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&upstream)
        .await;

    let response = app_for(upstream.uri())
        .oneshot(search_request("hello"))
        .await
        .unwrap();

    let envelope: ErrorEnvelope = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(envelope.status, 500);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app_for("http://127.0.0.1:9/lookup".to_string())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[test]
fn test_forwarder_requires_upstream_url() {
    let result = Forwarder::from_config(&ProxyConfig::default());
    assert!(matches!(
        result,
        Err(ForwardError::Config(ConfigError::MissingUpstreamUrl))
    ));
}

#[tokio::test]
async fn test_forwarder_applies_configured_timeout() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&upstream)
        .await;

    let config = ProxyConfig {
        upstream_url: Some(upstream.uri()),
        upstream_timeout_seconds: 1,
        ..ProxyConfig::default()
    };
    let forwarder = Forwarder::from_config(&config).unwrap();
    assert_eq!(forwarder.upstream_url(), upstream.uri());

    let err = tokio::time::timeout(Duration::from_secs(4), forwarder.forward("hello".into()))
        .await
        .expect("configured timeout was not applied")
        .unwrap_err();
    match err {
        ForwardError::Network(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other}"),
    }
}
