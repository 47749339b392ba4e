//! Domain layer for llm-ipsum
//!
//! This crate contains the core generation logic and value objects.
//! It has no dependencies on infrastructure or presentation concerns,
//! performs no I/O, and is fully synchronous.
//!
//! # Core Concepts
//!
//! ## Generation Request
//!
//! One immutable [`GenerationRequest`] describes a single placeholder-text
//! run: how many words, which model, which vocabulary topic, and how long
//! the remote call may block.
//!
//! ## Vocabulary Domain
//!
//! Generated text draws its word choice from a [`VocabularyDomain`], a
//! thematic noun phrase either supplied by the caller or drawn uniformly
//! at random from a fixed catalog. The draw goes through the
//! [`DomainPicker`] capability so callers control the randomness source.

pub mod budget;
pub mod core;
pub mod prompt;
pub mod vocabulary;

// Re-export commonly used types
pub use budget::token_budget;
pub use crate::core::{
    error::DomainError,
    request::{GenerationRequest, DEFAULT_MODEL},
};
pub use prompt::{IpsumPromptTemplate, PromptPair};
pub use vocabulary::{select_domain, DomainPicker, VocabularyDomain, GENERIC_TOPIC, VOCAB_DOMAINS};
