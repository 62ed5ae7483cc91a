use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A sealed unit of the ledger. Immutable once appended to the chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Build a block stamped with the current time.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 digest of the block's canonical JSON form, hex-encoded.
    ///
    /// The preimage goes through `serde_json::Value`, whose object maps keep
    /// keys in lexicographic order, so the digest depends only on the field
    /// values and never on declaration or insertion order.
    pub fn digest(&self) -> String {
        let value = serde_json::to_value(self).expect("block serializes to JSON");
        let canonical = serde_json::to_string(&value).expect("serialize canonical form");
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }
}
