//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashlink_core::Record;

/// Generate a random digest in canonical form (64 lowercase hex chars).
pub fn digest_hex() -> impl Strategy<Value = String> {
    any::<[u8; 32]>().prop_map(hex::encode)
}

/// Generate a height below `u64::MAX`, so `height + 1` does not wrap.
pub fn height() -> impl Strategy<Value = u64> {
    0u64..u64::MAX
}

/// Generate a record with a well-formed predecessor digest.
pub fn record() -> impl Strategy<Value = Record> {
    (digest_hex(), height()).prop_map(|(prev_digest, height)| Record {
        prev_digest,
        height,
    })
}

/// Generate text that is never valid hex: odd length, or contains a non-hex char.
pub fn invalid_hex() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-f]{1}([0-9a-f]{2}){0,31}",
        "[0-9a-f]{0,20}[g-z][0-9a-f]{0,20}",
    ]
}

/// Parameters for building a record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub prev: [u8; 32],
    pub height: u64,
}

impl RecordParams {
    /// Build the record.
    pub fn record(&self) -> Record {
        Record {
            prev_digest: hex::encode(self.prev),
            height: self.height,
        }
    }
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 32]>(), height())
            .prop_map(|(prev, height)| RecordParams { prev, height })
            .boxed()
    }
}
