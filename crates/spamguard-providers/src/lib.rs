//! SpamGuard Providers
//!
//! Classification and explanation backends behind one pair of traits.
//!
//! Two classify strategies ship:
//! - `ModelServiceProvider` forwards text to a dedicated model-serving
//!   HTTP endpoint
//! - `GatewayProvider` asks an OpenAI-compatible chat-completion gateway,
//!   forcing the verdict through a tool call
//!
//! Explanations always go through the gateway as free-text completions.

pub mod gateway;
pub mod model_service;
pub mod prompts;
pub mod provider;

pub use gateway::{GatewayProvider, DEFAULT_GATEWAY_MODEL, DEFAULT_GATEWAY_URL};
pub use model_service::{ModelServiceProvider, DEFAULT_MODEL_SERVICE_URL};
pub use provider::{ClassificationProvider, ExplanationProvider};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::gateway::GatewayProvider;
    pub use crate::model_service::ModelServiceProvider;
    pub use crate::provider::{ClassificationProvider, ExplanationProvider};
}
