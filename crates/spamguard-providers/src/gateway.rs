//! LLM gateway provider
//!
//! Talks to an OpenAI-compatible chat-completion API. Classification is
//! forced through the `classify_spam` tool so the gateway answers with
//! machine-readable arguments; explanation reads the plain message
//! content of the first choice.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use spamguard_core::{ChatMessage, Classification, Error, Explanation, Result, Verdict};

use crate::prompts;
use crate::provider::{ClassificationProvider, ExplanationProvider};

/// Default chat-completion API base
pub const DEFAULT_GATEWAY_URL: &str = "https://api.openai.com/v1";

/// Default model identifier
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for an OpenAI-compatible chat-completion gateway
pub struct GatewayProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GatewayProvider {
    /// Create a gateway provider. The credential stays optional here;
    /// calls fail with a configuration error when it is absent.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        }
    }

    /// Get the model identifier in use
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat-completion request and parse the response body
    async fn chat(&self, payload: serde_json::Value) -> Result<ChatCompletionResponse> {
        let api_key = self.api_key.as_deref().ok_or(Error::Misconfigured)?;
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "gateway request failed");
                Error::provider_unavailable("AI service error")
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "gateway returned an error");
            return match status.as_u16() {
                429 => Err(Error::RateLimited),
                402 => Err(Error::QuotaExhausted),
                _ => Err(Error::provider_unavailable("AI service error")),
            };
        }

        response.json::<ChatCompletionResponse>().await.map_err(|err| {
            tracing::error!(error = %err, "gateway response was not valid JSON");
            Error::MalformedResponse
        })
    }
}

#[async_trait]
impl ClassificationProvider for GatewayProvider {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let payload = json!({
            "model": self.model,
            "messages": [
                ChatMessage::system(prompts::CLASSIFY_SYSTEM_PROMPT),
                ChatMessage::user(text),
            ],
            "tools": [prompts::classify_tool()],
            "tool_choice": prompts::classify_tool_choice(),
        });

        let response = self.chat(payload).await?;

        let arguments = response.first_tool_arguments().ok_or_else(|| {
            tracing::error!("gateway response carried no tool call");
            Error::MalformedResponse
        })?;

        let verdict: ClassifyArguments = serde_json::from_str(arguments).map_err(|err| {
            tracing::error!(error = %err, "tool call arguments were not valid JSON");
            Error::MalformedResponse
        })?;

        Ok(Classification::new(verdict.classification, verdict.confidence))
    }

    fn name(&self) -> &str {
        "gateway"
    }
}

#[async_trait]
impl ExplanationProvider for GatewayProvider {
    async fn explain(&self, text: &str) -> Result<Explanation> {
        let payload = json!({
            "model": self.model,
            "messages": [
                ChatMessage::system(prompts::EXPLAIN_SYSTEM_PROMPT),
                ChatMessage::user(prompts::explain_user_prompt(text)),
            ],
        });

        let response = self.chat(payload).await?;

        let explanation = response
            .first_content()
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                tracing::error!("gateway response carried no message content");
                Error::MalformedResponse
            })?;

        Ok(Explanation::new(explanation))
    }

    fn name(&self) -> &str {
        "gateway"
    }
}

// =============================================================================
// Gateway response structures
// =============================================================================

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    fn first_message(&self) -> Option<&ResponseMessage> {
        self.choices.first().map(|choice| &choice.message)
    }

    fn first_content(&self) -> Option<&str> {
        self.first_message()?.content.as_deref()
    }

    fn first_tool_arguments(&self) -> Option<&str> {
        self.first_message()?
            .tool_calls
            .as_deref()?
            .first()
            .map(|call| call.function.arguments.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ClassifyArguments {
    classification: Verdict,
    confidence: f64,
}
