//! Canonical byte encoding for deterministic hashing.
//!
//! A record is encoded as:
//!
//! ```text
//! hex_decode(prev_digest) || height as u64 little-endian (8 bytes)
//! ```
//!
//! No length prefixes, no field tags. The decoded predecessor digest is
//! written as-is (32 bytes for every digest this system produces).
//!
//! **CRITICAL**: This encoding is FROZEN. Byte order and width must match
//! across implementations or digests will not agree.

use crate::error::Result;
use crate::record::Record;

/// Width in bytes of the encoded height.
pub const HEIGHT_LEN: usize = 8;

/// Encode a height in its canonical form (little-endian, 8 bytes).
pub fn encode_height(height: u64) -> [u8; HEIGHT_LEN] {
    height.to_le_bytes()
}

/// Encode a record to canonical bytes (the exact input to SHA-256).
///
/// Fails with [`crate::Error::Decode`] if `prev_digest` is not valid hex.
pub fn canonical_bytes(record: &Record) -> Result<Vec<u8>> {
    let prev = hex::decode(&record.prev_digest)?;

    let mut buf = Vec::with_capacity(prev.len() + HEIGHT_LEN);
    buf.extend_from_slice(&prev);
    buf.extend_from_slice(&encode_height(record.height));
    Ok(buf)
}
