//! Error types for SpamGuard

/// Result type alias using SpamGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SpamGuard operations
///
/// Every failure a request can hit is one of these variants. The HTTP
/// layer owns the mapping to status codes and client-facing messages;
/// the `Display` strings here are for logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request validation failures, carrying the client-facing message
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The gateway credential is absent from the environment
    #[error("gateway credential not configured")]
    Misconfigured,

    /// A backend provider could not serve the request, carrying the
    /// client-facing message ("Model service error", "Backend connection
    /// failed", "AI service error")
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The gateway rejected the request with HTTP 429
    #[error("provider rate limited the request")]
    RateLimited,

    /// The gateway rejected the request with HTTP 402
    #[error("provider credits exhausted")]
    QuotaExhausted,

    /// The provider answered 2xx but the body did not match the
    /// expected shape
    #[error("provider response did not match the expected shape")]
    MalformedResponse,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider-unavailable error
    pub fn provider_unavailable(msg: impl Into<String>) -> Self {
        Self::ProviderUnavailable(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
