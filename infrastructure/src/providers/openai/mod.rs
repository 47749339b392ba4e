//! OpenAI-compatible chat-completion provider
//!
//! Works against any endpoint implementing the OpenAI chat-completions
//! wire format (OpenAI itself, OpenRouter, local gateways).

pub mod gateway;
pub mod protocol;

pub use gateway::OpenAiCompatGateway;
