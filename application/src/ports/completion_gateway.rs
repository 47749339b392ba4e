//! Completion gateway port
//!
//! Defines the interface for one chat-style completion exchange with a
//! remote text-generation service.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model returned no completion text")]
    EmptyResponse,
}

/// One completion call: two messages, fixed budget, bounded wait.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Remote model identifier.
    pub model: String,
    /// Persistent style constraints (system role).
    pub system_prompt: String,
    /// The concrete task (user role).
    pub user_prompt: String,
    /// Token ceiling for the visible-plus-hidden output.
    pub max_tokens: u32,
    /// Upper bound on the call; expiry surfaces as [`GatewayError::Timeout`].
    pub timeout: Duration,
}

/// Gateway for remote completion calls
///
/// Exactly one request per invocation: no retry, no streaming, no
/// conversation state. On success the implementation returns the first
/// choice's message content verbatim (the caller normalizes whitespace).
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
