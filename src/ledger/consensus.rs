use super::block::Block;
use super::pow::ProofOfWork;
use super::validation::is_valid_chain;

/// Longest-valid-chain rule over already-fetched peer chains.
///
/// Returns the replacement when some candidate is strictly longer than the
/// local chain and passes validation; `None` when the local chain stays
/// authoritative. The longest qualifying candidate across the whole set
/// wins; ties never replace, and invalid candidates are ignored regardless
/// of length.
pub fn resolve(
    local: &[Block],
    candidates: Vec<Vec<Block>>,
    pow: &ProofOfWork,
) -> Option<Vec<Block>> {
    let mut best: Option<Vec<Block>> = None;
    let mut best_len = local.len();

    for candidate in candidates {
        if candidate.len() <= best_len {
            continue;
        }
        if !is_valid_chain(&candidate, pow) {
            continue;
        }
        best_len = candidate.len();
        best = Some(candidate);
    }

    best
}
