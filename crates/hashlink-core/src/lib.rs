//! # hashlink core
//!
//! Pure primitives for hashlink: records, canonical encoding, and digests.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over hash-linked records.
//!
//! ## Key Types
//!
//! - [`Record`] - One link in the chain: predecessor digest + height
//! - [`Sha256Hash`] - A raw 32-byte SHA-256 hash
//!
//! ## Operations
//!
//! - [`digest`] - Canonically encode a record and hash it (hex output)
//! - [`extend`] - Build the record that follows a given predecessor
//!
//! ## Canonicalization
//!
//! Records are hashed over `prev_digest_bytes || height_le_u64`. See the
//! [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod record;

pub use canonical::{canonical_bytes, encode_height};
pub use crypto::Sha256Hash;
pub use error::{Error, Result};
pub use record::{digest, extend, Record, DIGEST_HEX_LEN, NULL_DIGEST};
