//! Prompt composition for placeholder-text generation

pub mod template;

pub use template::{IpsumPromptTemplate, PromptPair};
