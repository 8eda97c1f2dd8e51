//! The Chain: produces hash-linked records one after another.
//!
//! The chain keeps only its head record and the head's digest. Each step
//! calls [`extend`] with the cached digest, then hashes the new record to
//! feed the next step. Nothing is stored beyond the head and nothing is
//! verified.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hashlink_core::{extend, Record, NULL_DIGEST};

use crate::error::{ChainError, Result};

/// Number of records produced by a default run.
pub const DEFAULT_CHAIN_LENGTH: u64 = 5;

/// Configuration for a chain run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// How many records to produce.
    pub length: u64,
}

impl ChainConfig {
    /// Check that the configuration can be run.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(ChainError::InvalidConfig(
                "chain length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_CHAIN_LENGTH,
        }
    }
}

/// A produced record together with its digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// The record.
    pub record: Record,
    /// `digest(record)`, which the next record carries as `prev_digest`.
    pub digest: String,
}

/// An in-memory chain producer.
#[derive(Debug, Clone)]
pub struct Chain {
    /// The most recent record (None before the first `produce`).
    head: Option<Record>,
    /// Digest of `head` ([`NULL_DIGEST`] when empty).
    head_digest: String,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            head: None,
            head_digest: NULL_DIGEST.to_string(),
        }
    }

    /// Produce a chain as described by `config`, starting from empty.
    pub fn run(config: &ChainConfig) -> Result<Vec<ChainLink>> {
        let mut links = Vec::new();
        Self::run_with(config, |link| {
            links.push(link);
            Ok::<_, ChainError>(())
        })?;
        Ok(links)
    }

    /// Produce a chain as described by `config`, handing each link to
    /// `on_link` as soon as it is made.
    ///
    /// Stops at the first error, whether from producing a record or from
    /// `on_link`, and returns the finished chain otherwise.
    pub fn run_with<E, F>(config: &ChainConfig, mut on_link: F) -> std::result::Result<Self, E>
    where
        E: From<ChainError>,
        F: FnMut(ChainLink) -> std::result::Result<(), E>,
    {
        config.validate()?;
        info!(length = config.length, "producing chain");

        let mut chain = Self::new();
        for _ in 0..config.length {
            on_link(chain.produce()?)?;
        }
        Ok(chain)
    }

    /// The most recent record.
    pub fn head(&self) -> Option<&Record> {
        self.head.as_ref()
    }

    /// Digest of the most recent record, or the null digest when empty.
    pub fn head_digest(&self) -> &str {
        &self.head_digest
    }

    /// Height of the head (0 when empty).
    pub fn height(&self) -> u64 {
        self.head.as_ref().map_or(0, |r| r.height)
    }

    /// Append one record and return it with its digest.
    ///
    /// On error the head is left untouched.
    pub fn produce(&mut self) -> Result<ChainLink> {
        let record = extend(self.head_digest.clone(), self.head.as_ref());
        let digest = record.digest()?;

        debug!(height = record.height, digest = %digest, "produced record");

        self.head_digest = digest.clone();
        self.head = Some(record.clone());

        Ok(ChainLink { record, digest })
    }

    /// Append `count` records.
    pub fn produce_many(&mut self, count: u64) -> Result<Vec<ChainLink>> {
        (0..count).map(|_| self.produce()).collect()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
