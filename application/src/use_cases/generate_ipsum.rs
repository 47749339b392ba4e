//! Generate Ipsum use case.
//!
//! Runs the whole pipeline for one placeholder-text request: resolve the
//! vocabulary domain, compose the prompt pair, estimate the token budget,
//! and make exactly one completion call through the gateway port.

use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use ipsum_domain::{select_domain, token_budget, DomainPicker, GenerationRequest, IpsumPromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during generation.
#[derive(Error, Debug)]
pub enum GenerateIpsumError {
    #[error("Completion failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Model returned no completion text")]
    EmptyResponse,
}

/// Use case for generating one run of placeholder text.
///
/// The gateway performs the remote call; the picker supplies the single
/// random draw used when no topic is given. Everything else is
/// deterministic.
pub struct GenerateIpsumUseCase {
    gateway: Arc<dyn CompletionGateway>,
    picker: Arc<dyn DomainPicker>,
}

impl GenerateIpsumUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, picker: Arc<dyn DomainPicker>) -> Self {
        Self { gateway, picker }
    }

    /// Execute the pipeline for one request.
    ///
    /// All-or-nothing: any failure yields an error and no text. The only
    /// blocking step is the gateway call, bounded by `request.timeout`.
    pub async fn execute(&self, request: &GenerationRequest) -> Result<String, GenerateIpsumError> {
        info!(
            word_count = request.word_count,
            model = %request.model,
            title = request.is_title,
            "Starting ipsum generation"
        );

        let domain = select_domain(&request.topic, self.picker.as_ref());
        let prompts = IpsumPromptTemplate::compose(request, &domain);
        let max_tokens = token_budget(request.word_count);

        debug!(domain = %domain, max_tokens, "Composed completion request");

        let completion = CompletionRequest {
            model: request.model.clone(),
            system_prompt: prompts.system_instruction,
            user_prompt: prompts.user_instruction,
            max_tokens,
            timeout: request.timeout,
        };

        let text = self.gateway.complete(&completion).await?;
        let text = text.trim();

        if text.is_empty() {
            return Err(GenerateIpsumError::EmptyResponse);
        }

        info!(bytes = text.len(), "Generation completed");
        Ok(text.to_string())
    }
}
