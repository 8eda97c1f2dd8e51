//! Golden test vectors for deterministic verification.
//!
//! Every implementation must produce these digests byte-for-byte. They pin
//! the canonical encoding (raw predecessor bytes, then the height as a
//! little-endian u64) and the hash (SHA-256, lowercase hex).

use serde::Serialize;

use hashlink_core::{Record, NULL_DIGEST};

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Predecessor digest (hex).
    pub prev_digest: &'static str,
    /// Height.
    pub height: u64,
    /// Expected digest (hex).
    pub expected_digest: &'static str,
}

impl GoldenVector {
    /// The record this vector describes.
    pub fn record(&self) -> Record {
        Record {
            prev_digest: self.prev_digest.to_string(),
            height: self.height,
        }
    }
}

/// Digests of the first five records of a chain started from the null digest.
pub fn chain_vectors() -> [&'static str; 5] {
    [
        "19ea44be89eece0fd4ec7482049f472a11af19384bffb38a88e77b3b1dd54c19",
        "166337d234a1d4821dc870005449dd9991b19394878ddd4a1e634e851d68d363",
        "f2b319426c4e9b8c4bd2ddd4406417111db6738689c2479a66b7fe41fe263e3f",
        "ab7f53f6a34ec1b64b9530dea29d4d17c47f56b8175549945e324fb8dcd27c02",
        "ade9c0a379703c68a69d2706dbcd55a35df829c8fd2c3ea08175d8ce89bae304",
    ]
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let chain = chain_vectors();
    vec![
        GoldenVector {
            name: "first record",
            prev_digest: NULL_DIGEST,
            height: 1,
            expected_digest: chain[0],
        },
        GoldenVector {
            name: "second record",
            prev_digest: chain[0],
            height: 2,
            expected_digest: chain[1],
        },
        GoldenVector {
            name: "third record",
            prev_digest: chain[1],
            height: 3,
            expected_digest: chain[2],
        },
        GoldenVector {
            name: "fourth record",
            prev_digest: chain[2],
            height: 4,
            expected_digest: chain[3],
        },
        GoldenVector {
            name: "fifth record",
            prev_digest: chain[3],
            height: 5,
            expected_digest: chain[4],
        },
        GoldenVector {
            name: "null prev at height 2",
            prev_digest: NULL_DIGEST,
            height: 2,
            expected_digest: "1de986ac168dcfb8a52b6320497a49a9cb6e9e9728ab59cfbb4b0d44da18fc04",
        },
        GoldenVector {
            name: "repeated 0xab prev at height 7",
            prev_digest: "abababababababababababababababababababababababababababababababab",
            height: 7,
            expected_digest: "e8ff2377d40511a1e4a6dc37c64214e3994ffb1a2238db00c70e84e21e11ce1a",
        },
        GoldenVector {
            name: "null prev at max height",
            prev_digest: NULL_DIGEST,
            height: u64::MAX,
            expected_digest: "44877601a9bfc8f71d76dbaee2f6a11d0899b3f5cdaad15978247de80c7d2a44",
        },
        // Empty prev decodes to zero bytes: only the height is hashed.
        GoldenVector {
            name: "empty prev at height 1",
            prev_digest: "",
            height: 1,
            expected_digest: "7c9fa136d4413fa6173637e883b6998d32e1d675f88cddff9dcbcf331820f4b8",
        },
        GoldenVector {
            name: "empty prev at height 0",
            prev_digest: "",
            height: 0,
            expected_digest: "af5570f5a1810b7af78caf4bc70a660f0df51e42baf91d4de5b2328de0e83dfc",
        },
    ]
}

/// Check every golden vector against this implementation.
///
/// Returns `(name, matches, computed_digest)` per vector. A vector whose
/// record fails to hash reports the error text as its digest.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match v.record().digest() {
            Ok(digest) => (v.name.to_string(), digest == v.expected_digest, digest),
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}
