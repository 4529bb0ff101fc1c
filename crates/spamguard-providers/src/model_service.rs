//! Model service provider
//!
//! Forwards text to a dedicated model-serving HTTP endpoint. The service
//! owns the model; this client only carries `{"text"}` over and the
//! verdict back.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use spamguard_core::{Classification, Error, Result, Verdict};

use crate::provider::ClassificationProvider;

/// Default address of the model-serving endpoint
pub const DEFAULT_MODEL_SERVICE_URL: &str = "http://127.0.0.1:5000/analyze";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for a dedicated model-serving endpoint
pub struct ModelServiceProvider {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeBody<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ModelVerdict {
    classification: Verdict,
    confidence: f64,
}

impl ModelServiceProvider {
    /// Create a provider pointing at the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: url.into(),
        }
    }
}

impl Default for ModelServiceProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_SERVICE_URL)
    }
}

#[async_trait]
impl ClassificationProvider for ModelServiceProvider {
    async fn classify(&self, text: &str) -> Result<Classification> {
        tracing::debug!(url = %self.url, "forwarding text to model service");

        let response = self
            .client
            .post(&self.url)
            .json(&AnalyzeBody { text })
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "model service unreachable");
                Error::provider_unavailable("Backend connection failed")
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "model service returned an error");
            return Err(Error::provider_unavailable("Model service error"));
        }

        let verdict: ModelVerdict = response.json().await.map_err(|err| {
            tracing::error!(error = %err, "model service response did not parse");
            Error::MalformedResponse
        })?;

        Ok(Classification::new(verdict.classification, verdict.confidence))
    }

    fn name(&self) -> &str {
        "model-service"
    }
}
