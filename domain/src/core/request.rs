//! Generation request value object

use super::error::DomainError;
use std::time::Duration;

/// Model identifier used when the caller does not specify one.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash-lite";

/// Default remote-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 7.0;

/// A single placeholder-text generation request (Value Object)
///
/// Immutable once constructed. A zero word count and a non-positive
/// timeout are rejected at construction, so downstream prompt composition
/// can rely on both invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Number of words the generated text must contain.
    pub word_count: u32,
    /// Vocabulary topic; [`GENERIC_TOPIC`](crate::vocabulary::GENERIC_TOPIC)
    /// means "draw one from the catalog".
    pub topic: String,
    /// Generate heading-style text (no trailing punctuation, noun phrases).
    pub is_title: bool,
    /// Remote model identifier, passed through verbatim.
    pub model: String,
    /// Upper bound on the remote call.
    pub timeout: Duration,
}

impl GenerationRequest {
    /// Create a request with defaults for everything but the word count.
    pub fn new(word_count: u32) -> Result<Self, DomainError> {
        if word_count == 0 {
            return Err(DomainError::InvalidWordCount(word_count));
        }

        Ok(Self {
            word_count,
            topic: crate::vocabulary::GENERIC_TOPIC.to_string(),
            is_title: false,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Set the vocabulary topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Enable or disable title mode.
    pub fn with_title(mut self, is_title: bool) -> Self {
        self.is_title = is_title;
        self
    }

    /// Set the remote model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the remote-call timeout from seconds.
    pub fn with_timeout_secs(mut self, secs: f64) -> Result<Self, DomainError> {
        if secs <= 0.0 || !secs.is_finite() {
            return Err(DomainError::InvalidTimeout(secs));
        }
        self.timeout = Duration::from_secs_f64(secs);
        Ok(self)
    }
}
