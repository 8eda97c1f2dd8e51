//! Record: one link in a hash-linked chain.
//!
//! A record commits to the digest of its predecessor and carries a height
//! that grows by one per link. Records are immutable once built; the next
//! link is a new record, produced by [`extend`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::canonical_bytes;
use crate::crypto::Sha256Hash;
use crate::error::Result;

/// Length of a digest in hex characters (32 bytes, two characters each).
pub const DIGEST_HEX_LEN: usize = 64;

/// Digest of "no predecessor": 64 `'0'` characters, the same length as a
/// real digest.
pub const NULL_DIGEST: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// A record in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Hex digest of the previous record ([`NULL_DIGEST`] for the first one).
    pub prev_digest: String,

    /// Position in the chain (1-indexed).
    pub height: u64,
}

impl Record {
    /// Compute this record's digest. Shorthand for `digest(Some(self))`.
    pub fn digest(&self) -> Result<String> {
        digest(Some(self))
    }

    /// The exact bytes this record hashes over.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        canonical_bytes(self)
    }

    /// Check if this is the first record of a chain.
    pub fn is_first(&self) -> bool {
        self.height == 1
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{prev_digest:{} height:{}}}",
            self.prev_digest, self.height
        )
    }
}

/// Hash a record, or return [`NULL_DIGEST`] when there is none.
///
/// The digest is `hex(SHA-256(canonical_bytes(record)))`: 64 lowercase hex
/// characters.
///
/// # Errors
///
/// [`crate::Error::Decode`] if `prev_digest` is not valid hex. Digests
/// produced by this function always decode, so this only fires on records
/// assembled by hand.
pub fn digest(record: Option<&Record>) -> Result<String> {
    let Some(record) = record else {
        return Ok(NULL_DIGEST.to_string());
    };

    let bytes = canonical_bytes(record)?;
    let hash = Sha256Hash::hash(&bytes).to_hex();

    tracing::trace!(
        height = record.height,
        bytes = %hex::encode(&bytes),
        digest = %hash,
        "hashed record"
    );

    Ok(hash)
}

/// Build the record that follows `prev`.
///
/// `prev_digest` must be `digest(prev)`; the caller computes it and this
/// function copies it verbatim without checking it. The first record
/// (`prev` is `None`) has height 1. Heights wrap to 0 after `u64::MAX`.
pub fn extend(prev_digest: impl Into<String>, prev: Option<&Record>) -> Record {
    let height = match prev {
        Some(prev) => prev.height.wrapping_add(1),
        None => 1,
    };

    Record {
        prev_digest: prev_digest.into(),
        height,
    }
}
