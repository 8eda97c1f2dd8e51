//! # hashlink
//!
//! The unified API for hashlink: a minimal hash-linked chain of records.
//!
//! ## Overview
//!
//! - **Record**: A predecessor digest and a height. Immutable once built.
//! - **Digest**: SHA-256 over the record's canonical bytes, as lowercase hex.
//! - **Extend**: Builds the next record from a predecessor and its digest.
//! - **Chain**: Threads `digest` and `extend` to produce a sequence of links.
//!
//! The chain is produced, never verified. There is no storage, networking, or
//! consensus.
//!
//! ## Usage
//!
//! ```rust
//! use hashlink::{Chain, ChainConfig};
//!
//! let links = Chain::run(&ChainConfig::default()).unwrap();
//! assert_eq!(links.len(), 5);
//! assert_eq!(links[0].record.height, 1);
//! assert_eq!(links[4].record.prev_digest, links[3].digest);
//! ```
//!
//! Or step by step with the core functions:
//!
//! ```rust
//! use hashlink::{digest, extend};
//!
//! let first = extend(digest(None).unwrap(), None);
//! let second = extend(first.digest().unwrap(), Some(&first));
//! assert_eq!(second.height, 2);
//! ```
//!
//! ## Re-exports
//!
//! - `hashlink::core` - Core primitives (Record, digest, extend, canonical encoding)

pub mod chain;
pub mod error;

pub use hashlink_core as core;

pub use chain::{Chain, ChainConfig, ChainLink, DEFAULT_CHAIN_LENGTH};
pub use error::{ChainError, Result};

pub use hashlink_core::{
    canonical_bytes, digest, encode_height, extend, Record, Sha256Hash, DIGEST_HEX_LEN,
    NULL_DIGEST,
};
