//! Core types for SpamGuard

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which analysis the caller is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Return a spam/safe verdict with a confidence score
    Classify,
    /// Return a natural-language explanation of the verdict
    Explain,
}

impl Action {
    /// Wire name of this action, for logs and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Classify => "classify",
            Action::Explain => "explain",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary spam verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Spam,
    Safe,
}

impl Verdict {
    /// Wire name of this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Spam => "spam",
            Verdict::Safe => "safe",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a classify call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// The spam/safe verdict
    pub classification: Verdict,

    /// Confidence score in [0, 100]
    pub confidence: f64,
}

impl Classification {
    /// Create a classification, clamping confidence into [0, 100]
    pub fn new(classification: Verdict, confidence: f64) -> Self {
        Self {
            classification,
            confidence: confidence.clamp(0.0, 100.0),
        }
    }
}

/// Result of an explain call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Free-text reasoning, expected under ~100 words
    pub explanation: String,
}

impl Explanation {
    /// Create an explanation
    pub fn new(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
        }
    }
}

/// A single analyze call, parsed and validated from the request body
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// The text under analysis, non-empty after trimming
    pub text: String,

    /// Which analysis to run
    pub action: Action,
}

impl AnalyzeRequest {
    /// Parse and validate a raw request body.
    ///
    /// Validation runs in contract order with the first failure winning:
    /// the body must be JSON, `text` must be a non-blank string, and
    /// `action` must be one of the two supported values. The error
    /// messages are the exact strings clients see.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|_| Error::invalid_input("Request body must be valid JSON"))?;

        let text = match value.get("text") {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => {
                return Err(Error::invalid_input(
                    "Text is required and must be a string",
                ))
            }
        };

        let action = match value.get("action").and_then(|a| a.as_str()) {
            Some("classify") => Action::Classify,
            Some("explain") => Action::Explain,
            _ => {
                return Err(Error::invalid_input(
                    "Action must be 'classify' or 'explain'",
                ))
            }
        };

        Ok(Self { text, action })
    }
}

/// A chat message in a gateway conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}
