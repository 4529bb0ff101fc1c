//! Provider traits for classification and explanation backends

use async_trait::async_trait;
use spamguard_core::{Classification, Explanation, Result};

/// Trait for backends that classify text as spam or safe
#[async_trait]
pub trait ClassificationProvider: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the provider name
    fn name(&self) -> &str;
}

/// Trait for backends that explain why text reads as spam or safe
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Explain the verdict for the given text
    async fn explain(&self, text: &str) -> Result<Explanation>;

    /// Get the provider name
    fn name(&self) -> &str;
}
