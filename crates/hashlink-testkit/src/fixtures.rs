//! Test fixtures and helpers.

use hashlink::{Chain, ChainLink};
use hashlink_core::Record;

/// Produce a chain of `length` links starting from the null digest.
///
/// Panics if hashing fails, which cannot happen for produced records.
pub fn build_chain(length: u64) -> Vec<ChainLink> {
    Chain::new()
        .produce_many(length)
        .expect("produced records always hash")
}

/// A hand-made record, bypassing `extend`.
pub fn record_at(prev_digest: &str, height: u64) -> Record {
    Record {
        prev_digest: prev_digest.to_string(),
        height,
    }
}
