//! Completion Gateway port
//!
//! Defines the interface for requesting text completions from a language
//! model service.

use async_trait::async_trait;
use survey_domain::CompletionRequest;
use thiserror::Error;

/// Errors that can occur during completion gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text completion
///
/// This port defines how the application layer talks to the completion
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Request one completion per prompt in `request`.
    ///
    /// Returns the completion texts in prompt order. Implementations return
    /// whatever the service produced; the caller checks the count.
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>, GatewayError>;
}
