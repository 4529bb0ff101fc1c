//! Gateway provider tests against an in-process stub gateway
//!
//! Each test spins up a local axum server that plays the chat-completion
//! API, captures the request it receives, and answers with a canned
//! status and body.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

use spamguard_core::{Error, Verdict};
use spamguard_providers::{ClassificationProvider, ExplanationProvider, GatewayProvider};

/// Requests the stub has seen: (authorization header, payload)
type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

#[derive(Clone)]
struct StubGateway {
    captured: Captured,
    status: StatusCode,
    body: Value,
}

async fn stub_handler(
    State(stub): State<StubGateway>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    stub.captured.lock().await.push((auth, payload));
    (stub.status, Json(stub.body.clone()))
}

/// Start a stub gateway and return its base URL plus the capture handle
async fn spawn_stub(status: StatusCode, body: Value) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let stub = StubGateway {
        captured: captured.clone(),
        status,
        body,
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(stub_handler))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1", addr), captured)
}

fn tool_call_body(arguments: &str) -> Value {
    json!({
        "choices": [{
            "message": {
                "content": null,
                "tool_calls": [{
                    "function": {
                        "name": "classify_spam",
                        "arguments": arguments
                    }
                }]
            }
        }]
    })
}

fn content_body(content: &str) -> Value {
    json!({
        "choices": [{
            "message": { "content": content }
        }]
    })
}

#[tokio::test]
async fn test_classify_parses_tool_call() {
    let (base_url, captured) = spawn_stub(
        StatusCode::OK,
        tool_call_body(r#"{"classification":"spam","confidence":97.5}"#),
    )
    .await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider
        .classify("WIN A FREE PRIZE CALL 09061701461 NOW")
        .await
        .unwrap();

    assert_eq!(result.classification, Verdict::Spam);
    assert_eq!(result.confidence, 97.5);

    let seen = captured.lock().await;
    let (auth, payload) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(payload["model"], "test-model");
    assert_eq!(payload["messages"][0]["role"], "system");
    assert_eq!(
        payload["messages"][1]["content"],
        "WIN A FREE PRIZE CALL 09061701461 NOW"
    );
    assert_eq!(payload["tools"][0]["function"]["name"], "classify_spam");
    assert_eq!(payload["tool_choice"]["function"]["name"], "classify_spam");
}

#[tokio::test]
async fn test_classify_clamps_out_of_range_confidence() {
    let (base_url, _captured) = spawn_stub(
        StatusCode::OK,
        tool_call_body(r#"{"classification":"safe","confidence":150.0}"#),
    )
    .await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider.classify("hello").await.unwrap();

    assert_eq!(result.classification, Verdict::Safe);
    assert_eq!(result.confidence, 100.0);
}

#[tokio::test]
async fn test_classify_rejects_missing_tool_call() {
    let (base_url, _captured) =
        spawn_stub(StatusCode::OK, content_body("this is prose, not a tool call")).await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider.classify("hello").await;

    assert!(matches!(result, Err(Error::MalformedResponse)));
}

#[tokio::test]
async fn test_classify_rejects_unparsable_arguments() {
    let (base_url, _captured) =
        spawn_stub(StatusCode::OK, tool_call_body("not json at all")).await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider.classify("hello").await;

    assert!(matches!(result, Err(Error::MalformedResponse)));
}

#[tokio::test]
async fn test_explain_returns_content() {
    let (base_url, captured) = spawn_stub(
        StatusCode::OK,
        content_body("Contains WIN and FREE urgency markers plus a premium rate number."),
    )
    .await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider
        .explain("WIN A FREE PRIZE CALL 09061701461 NOW")
        .await
        .unwrap();

    assert!(result.explanation.contains("urgency markers"));

    let seen = captured.lock().await;
    let (_, payload) = &seen[0];
    assert_eq!(payload["messages"][0]["role"], "system");
    assert!(payload["messages"][1]["content"]
        .as_str()
        .unwrap()
        .contains("WIN A FREE PRIZE CALL 09061701461 NOW"));
    assert!(payload.get("tools").is_none());
}

#[tokio::test]
async fn test_explain_rejects_empty_content() {
    let (base_url, _captured) = spawn_stub(StatusCode::OK, content_body("")).await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider.explain("hello").await;

    assert!(matches!(result, Err(Error::MalformedResponse)));
}

#[tokio::test]
async fn test_rate_limit_maps_to_error() {
    let (base_url, _captured) =
        spawn_stub(StatusCode::TOO_MANY_REQUESTS, json!({"error": "slow down"})).await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));

    let result = provider.classify("hello").await;
    assert!(matches!(result, Err(Error::RateLimited)));
}

#[tokio::test]
async fn test_quota_exhaustion_maps_to_error() {
    let (base_url, _captured) =
        spawn_stub(StatusCode::PAYMENT_REQUIRED, json!({"error": "no credits"})).await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));

    let result = provider.explain("hello").await;
    assert!(matches!(result, Err(Error::QuotaExhausted)));
}

#[tokio::test]
async fn test_gateway_failure_maps_to_service_error() {
    let (base_url, _captured) =
        spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;

    let provider = GatewayProvider::new(base_url, "test-model", Some("test-key".into()));
    let result = provider.classify("hello").await;

    match result {
        Err(Error::ProviderUnavailable(msg)) => assert_eq!(msg, "AI service error"),
        other => panic!("expected provider unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_credential_fails_before_any_call() {
    let (base_url, captured) = spawn_stub(
        StatusCode::OK,
        tool_call_body(r#"{"classification":"safe","confidence":90.0}"#),
    )
    .await;

    let provider = GatewayProvider::new(base_url, "test-model", None);
    let result = provider.classify("hello").await;

    assert!(matches!(result, Err(Error::Misconfigured)));
    assert!(captured.lock().await.is_empty());
}
