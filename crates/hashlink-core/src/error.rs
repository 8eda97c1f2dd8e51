//! Error types for hashlink core.

use thiserror::Error;

/// Core errors that can occur while hashing records.
#[derive(Debug, Error)]
pub enum Error {
    /// The predecessor digest is not valid hex (bad character or odd length).
    ///
    /// Every digest in the chain comes from [`crate::digest`], so hitting this
    /// means a record was built by hand with a malformed `prev_digest`.
    #[error("decode error: {0}")]
    Decode(#[from] hex::FromHexError),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
