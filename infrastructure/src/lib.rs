//! Infrastructure layer for llm-ipsum
//!
//! This crate contains the adapters that connect the application layer to
//! the outside world: the OpenAI-compatible HTTP gateway, the process
//! environment, and the `rand`-backed domain picker.

pub mod config;
pub mod providers;
pub mod random;

// Re-export commonly used types
pub use config::env::ProcessEnv;
pub use providers::openai::OpenAiCompatGateway;
pub use random::ThreadRngPicker;
