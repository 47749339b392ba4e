//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Word count must be at least 1 (got {0})")]
    InvalidWordCount(u32),

    #[error("Timeout must be positive (got {0}s)")]
    InvalidTimeout(f64),
}
