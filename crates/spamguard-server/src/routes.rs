//! HTTP routes and handlers

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use spamguard_core::{Action, AnalyzeRequest, Error};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tracing::{error, info};
use uuid::Uuid;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]));

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/v1/analyze", post(analyze).options(preflight))
        .fallback(fallback)
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Prometheus metrics endpoint
async fn metrics_handler(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Plain OPTIONS requests that the CORS layer does not answer itself
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Classify or explain a piece of text
async fn analyze(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request_id = Uuid::new_v4();
    let request = AnalyzeRequest::from_slice(&body)?;

    metrics::counter!("spamguard_requests_total", "action" => request.action.as_str())
        .increment(1);
    info!(
        request_id = %request_id,
        action = %request.action,
        text_len = request.text.len(),
        "Processing analyze request"
    );

    // Both actions can reach the gateway, so the credential is checked
    // before dispatch.
    if !state.credential_configured() {
        error!(request_id = %request_id, "Gateway credential missing");
        return Err(Error::Misconfigured.into());
    }

    let start = Instant::now();
    let response = match request.action {
        Action::Classify => {
            let result = state.classifier.classify(&request.text).await?;
            info!(
                request_id = %request_id,
                provider = state.classifier.name(),
                classification = %result.classification,
                confidence = result.confidence,
                "Classification complete"
            );
            Json(result).into_response()
        }
        Action::Explain => {
            let result = state.explainer.explain(&request.text).await?;
            info!(
                request_id = %request_id,
                provider = state.explainer.name(),
                "Explanation complete"
            );
            Json(result).into_response()
        }
    };
    metrics::histogram!("spamguard_provider_latency_ms", "action" => request.action.as_str())
        .record(start.elapsed().as_secs_f64() * 1000.0);

    Ok(response)
}

// ============================================================================
// Error mapping
// ============================================================================

/// Maps core errors onto HTTP responses with flat `{"error": ...}` bodies
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match &self.0 {
            Error::InvalidInput(_) => "invalid_input",
            Error::Misconfigured => "misconfigured",
            Error::ProviderUnavailable(_) => "provider_unavailable",
            Error::RateLimited => "rate_limited",
            Error::QuotaExhausted => "quota_exhausted",
            Error::MalformedResponse => "malformed_response",
            Error::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::counter!("spamguard_errors_total", "kind" => self.kind()).increment(1);

        let (status, message) = match self.0 {
            Error::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            Error::Misconfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI service not configured".to_string(),
            ),
            Error::ProviderUnavailable(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Error::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.".to_string(),
            ),
            Error::QuotaExhausted => (
                StatusCode::PAYMENT_REQUIRED,
                "AI credits depleted. Please add credits to continue.".to_string(),
            ),
            Error::MalformedResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid AI response format".to_string(),
            ),
            Error::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
