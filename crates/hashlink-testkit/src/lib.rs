//! # hashlink testkit
//!
//! Testing utilities for hashlink.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known records with expected digests for cross-implementation checks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helpers for building chains and hand-made records
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hashlink_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, digest) in verify_all_vectors() {
//!     assert!(matches, "{name}: {digest}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashlink_testkit::generators::record;
//!
//! proptest! {
//!     #[test]
//!     fn digest_is_deterministic(r in record()) {
//!         prop_assert_eq!(r.digest().unwrap(), r.clone().digest().unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hashlink_testkit::fixtures::build_chain;
//!
//! let links = build_chain(3);
//! assert_eq!(links[2].record.height, 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{build_chain, record_at};
pub use generators::RecordParams;
pub use vectors::{all_vectors, chain_vectors, verify_all_vectors, GoldenVector};
