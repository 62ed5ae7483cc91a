use std::sync::atomic::{AtomicBool, Ordering};

use sha2::{Digest, Sha256};

/// Nonce-search puzzle gating block creation: a proof is valid when the
/// SHA-256 digest of the previous proof concatenated with it carries enough
/// leading zero hex digits. Verification is a single digest; the search is a
/// brute-force scan.
#[derive(Debug, Clone, Copy)]
pub struct ProofOfWork {
    difficulty: usize,
}

impl ProofOfWork {
    pub const fn new(difficulty: usize) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// True iff sha256 of the decimal concatenation `"{last_proof}{proof}"`
    /// starts with `difficulty` zero hex digits.
    pub fn verify(&self, last_proof: u64, proof: u64) -> bool {
        let guess = format!("{last_proof}{proof}");
        let mut hasher = Sha256::new();
        hasher.update(guess.as_bytes());
        let digest = hex::encode(hasher.finalize());

        let target_prefix = "0".repeat(self.difficulty);
        digest.starts_with(&target_prefix)
    }

    /// Scan from 0 and return the smallest valid proof. Blocks the calling
    /// thread until found, with no upper bound on trials.
    pub fn search(&self, last_proof: u64) -> u64 {
        let mut proof = 0u64;
        while !self.verify(last_proof, proof) {
            proof += 1;
        }
        proof
    }

    /// Same scan, but checks `abort` between trials so a caller can stop a
    /// search whose result no longer matters (e.g. the tip moved under it).
    pub fn search_with_abort(&self, last_proof: u64, abort: &AtomicBool) -> Option<u64> {
        let mut proof = 0u64;
        loop {
            if abort.load(Ordering::Relaxed) {
                return None;
            }
            if self.verify(last_proof, proof) {
                return Some(proof);
            }
            proof += 1;
        }
    }
}
