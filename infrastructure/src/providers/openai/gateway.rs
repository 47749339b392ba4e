//! OpenAI-compatible completion gateway
//!
//! Implements the [`CompletionGateway`] port with one bounded HTTP POST
//! per call. Sampling parameters are deliberately fixed here: an elevated
//! "creative" temperature and nucleus threshold shared by every request.

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use ipsum_application::{CompletionGateway, CompletionRequest, Credentials, GatewayError};
use tracing::debug;

/// Sampling temperature for all requests.
const TEMPERATURE: f64 = 1.25;

/// Nucleus-sampling threshold for all requests.
const TOP_P: f64 = 0.98;

/// Identification headers attached to every request, provider-agnostic.
const REFERER_HEADER: (&str, &str) = ("HTTP-Referer", "https://github.com/music-brain88/llm-ipsum");
const TITLE_HEADER: (&str, &str) = ("X-Title", "llm-ipsum");

/// Maximum error-body excerpt carried into a failure message.
const ERROR_BODY_EXCERPT: usize = 200;

/// Gateway for OpenAI-compatible chat-completion endpoints.
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl OpenAiCompatGateway {
    /// Create a gateway for the given credentials.
    ///
    /// The per-request timeout comes from each [`CompletionRequest`], so
    /// the shared client carries none.
    pub fn new(credentials: Credentials) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            GatewayError::RequestFailed(format!("Failed to build HTTP client: {e}"))
        })?;

        let endpoint = format!(
            "{}/chat/completions",
            credentials.base_url().trim_end_matches('/')
        );

        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompatGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest {
            model: request.model.clone(),
            messages: vec![
                ChatMessage::system(&request.system_prompt),
                ChatMessage::user(&request.user_prompt),
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: request.max_tokens,
        };

        debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            max_tokens = request.max_tokens,
            timeout_ms = request.timeout.as_millis() as u64,
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credentials.api_key())
            .header(REFERER_HEADER.0, REFERER_HEADER.1)
            .header(TITLE_HEADER.0, TITLE_HEADER.1)
            .timeout(request.timeout)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                excerpt.trim()
            )));
        }

        let parsed: ChatCompletionResponse =
            response.json().await.map_err(map_transport_error)?;

        parsed
            .first_content()
            .map(str::to_string)
            .ok_or(GatewayError::EmptyResponse)
    }
}

/// Collapse reqwest failures into the port's error kinds.
fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}
