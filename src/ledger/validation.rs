use super::block::Block;
use super::pow::ProofOfWork;

/// Check the structural and proof-of-work invariants of a candidate chain.
///
/// Walks adjacent pairs starting at the second block and short-circuits on
/// the first violation. Chains with fewer than two blocks are valid; the
/// genesis sentinel is never compared against a digest, so validation starts
/// at index 1.
pub fn is_valid_chain(chain: &[Block], pow: &ProofOfWork) -> bool {
    for i in 1..chain.len() {
        let current = &chain[i];
        let prev = &chain[i - 1];

        // Index continuity
        if current.index != prev.index + 1 {
            return false;
        }

        // Hash linkage against the recomputed digest
        if current.previous_hash != prev.digest() {
            return false;
        }

        // Proof relation between consecutive proofs
        if !pow.verify(prev.proof, current.proof) {
            return false;
        }
    }

    true
}
