//! Cryptographic primitives: SHA-256 hashing with a strong type.

use sha2::{Digest, Sha256};
use std::fmt;

/// Length in bytes of a SHA-256 hash.
pub const HASH_LEN: usize = 32;

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Hash(pub [u8; HASH_LEN]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        Self(result.into())
    }

    /// Convert to lowercase hex string (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The zero hash. Its hex form is the "no predecessor" sentinel.
    pub const ZERO: Self = Self([0u8; HASH_LEN]);
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA256({}...)", &self.to_hex()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hash() {
        let h1 = Sha256Hash::hash(b"test");
        let h2 = Sha256Hash::hash(b"test");
        assert_eq!(h1, h2);

        let h3 = Sha256Hash::hash(b"different");
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_sha256_known_vector() {
        // FIPS 180-2 "abc"
        assert_eq!(
            Sha256Hash::hash(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hex_is_lowercase_and_64_chars() {
        let hex = Sha256Hash([0xAB; HASH_LEN]).to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, hex.to_lowercase());
    }

    #[test]
    fn test_zero_hash() {
        assert_eq!(Sha256Hash::ZERO.to_hex(), "0".repeat(64));
    }

    #[test]
    fn test_debug_is_truncated() {
        let debug = format!("{:?}", Sha256Hash([0xcd; HASH_LEN]));
        assert_eq!(debug, "SHA256(cdcdcdcd...)");
    }
}
