use std::collections::BTreeSet;

use super::{ScoredCandidate, Weights};
use crate::links::LinkExtractor;
use crate::post::{Post, TagKind, TagRef};

/// The parts of the source post every candidate is compared against
#[derive(Debug, Clone)]
pub struct SourceProfile<'a> {
    pub post: &'a Post,
    pub links: BTreeSet<String>,
}

impl<'a> SourceProfile<'a> {
    pub fn new(post: &'a Post, extractor: &LinkExtractor) -> Self {
        SourceProfile {
            post,
            links: extractor.extract(&post.body),
        }
    }
}

/// Number of tag ids present in both sets
pub fn shared_count<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> usize {
    a.intersection(b).count()
}

/// Weighted overlap between the source and one candidate
///
/// Sums saturate at `u32::MAX`.
pub fn score_candidate(
    source: &SourceProfile<'_>,
    candidate: &Post,
    weights: &Weights,
) -> ScoredCandidate {
    let linked = source.links.contains(&candidate.slug);
    let mut score = if linked { weights.link } else { 0 };
    let mut shared_tags = BTreeSet::new();

    for kind in TagKind::ALL {
        let ours: BTreeSet<&TagRef> = source.post.tags_of(kind).collect();
        let theirs: BTreeSet<&TagRef> = candidate.tags_of(kind).collect();
        let shared = shared_count(&ours, &theirs);
        let shared = u32::try_from(shared).unwrap_or(u32::MAX);
        score = score.saturating_add(shared.saturating_mul(weights.for_kind(kind)));
        shared_tags.extend(ours.intersection(&theirs).map(|t| (*t).clone()));
    }

    ScoredCandidate {
        post_id: candidate.id,
        score,
        linked,
        shared_tags,
    }
}
