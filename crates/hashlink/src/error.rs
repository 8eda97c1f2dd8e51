//! Error types for chain production.

use thiserror::Error;

/// Errors that can occur while producing a chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Hashing a record failed.
    #[error("core error: {0}")]
    Core(#[from] hashlink_core::Error),

    /// The chain configuration cannot be honoured.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
