//! Application layer for llm-ipsum
//!
//! This crate contains use cases, port definitions, and credential
//! resolution. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::credentials::{
    resolve_credentials, CredentialLookup, Credentials, CredentialsError,
};
pub use ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
pub use use_cases::generate_ipsum::{GenerateIpsumError, GenerateIpsumUseCase};
