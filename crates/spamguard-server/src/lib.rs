//! SpamGuard Server
//!
//! HTTP server that classifies text as spam or safe, either through a
//! dedicated model-serving endpoint or through an LLM gateway, and that
//! explains verdicts in plain language.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::{GatewayConfig, ProviderKind, ServerConfig};
pub use routes::create_router;
pub use state::AppState;
