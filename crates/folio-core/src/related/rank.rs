use std::cmp::Reverse;

use super::ScoredCandidate;

/// Drop unrelated candidates, order by score and keep the first `limit`.
///
/// Equal scores keep their input order.
pub fn rank(mut candidates: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    candidates.retain(|c| c.score > 0);
    candidates.sort_by_key(|c| Reverse(c.score));
    candidates.truncate(limit);
    candidates
}
