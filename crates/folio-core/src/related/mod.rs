//! Related-content engine for blog posts
//!
//! Scores every candidate post against a source post by weighted overlap of
//! direct links and shared tags, then keeps the best non-zero matches.

mod rank;
mod score;

pub use rank::rank;
pub use score::{score_candidate, shared_count, SourceProfile};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::links::LinkExtractor;
use crate::post::{Post, PostId, PostSummary, TagKind, TagRef};

/// Largest weight one contribution may carry
pub const MAX_WEIGHT: u32 = 10_000;

/// Per-contribution weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Candidate is linked from the source body
    pub link: u32,
    /// Each shared topic
    pub topic: u32,
    /// Each shared technology
    pub technology: u32,
    /// Each shared hashtag
    pub hashtag: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            link: 4,
            topic: 3,
            technology: 2,
            hashtag: 1,
        }
    }
}

impl Weights {
    /// Reject weights above [`MAX_WEIGHT`]
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("link", self.link),
            ("topic", self.topic),
            ("technology", self.technology),
            ("hashtag", self.hashtag),
        ];
        for (name, value) in named {
            if value > MAX_WEIGHT {
                return Err(FolioError::validation(
                    &format!("weights.{}", name),
                    format!("{} exceeds the maximum of {}", value, MAX_WEIGHT),
                ));
            }
        }
        Ok(())
    }

    pub fn for_kind(&self, kind: TagKind) -> u32 {
        match kind {
            TagKind::Topic => self.topic,
            TagKind::Technology => self.technology,
            TagKind::Hashtag => self.hashtag,
        }
    }
}

/// Score of one candidate against the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub post_id: PostId,
    pub score: u32,
    /// Whether the source body links to this candidate
    pub linked: bool,
    pub shared_tags: BTreeSet<TagRef>,
}

/// One entry of a related-content result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPost {
    pub blog: PostSummary,
    pub score: u32,
    pub shared_tags: Vec<String>,
}

/// Result of a related-content query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedResponse {
    pub related_blogs: Vec<RelatedPost>,
    pub total: usize,
}

impl RelatedResponse {
    pub fn new(related_blogs: Vec<RelatedPost>) -> Self {
        let total = related_blogs.len();
        RelatedResponse {
            related_blogs,
            total,
        }
    }
}

/// Related-content engine
#[derive(Debug, Clone)]
pub struct RelatedEngine {
    weights: Weights,
    extractor: LinkExtractor,
}

impl RelatedEngine {
    pub fn new(weights: Weights) -> Result<Self> {
        weights.validate()?;
        Ok(RelatedEngine {
            weights,
            extractor: LinkExtractor::new()?,
        })
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Score every candidate in `pool` against `source`, in pool order.
    ///
    /// The source itself is skipped wherever it appears in the pool.
    pub fn score_all(&self, source: &Post, pool: &[Post]) -> Vec<ScoredCandidate> {
        let profile = SourceProfile::new(source, &self.extractor);
        pool.iter()
            .filter(|candidate| candidate.id != source.id)
            .map(|candidate| score_candidate(&profile, candidate, &self.weights))
            .collect()
    }

    /// Top `limit` related posts for `source`, best first
    #[tracing::instrument(skip(self, source, pool), fields(source_id = source.id, pool = pool.len()))]
    pub fn find_related(&self, source: &Post, pool: &[Post], limit: usize) -> Vec<RelatedPost> {
        let scored = self.score_all(source, pool);
        let ranked = rank(scored, limit);
        debug!(returned = ranked.len(), "ranked related posts");

        ranked
            .into_iter()
            .filter_map(|candidate| {
                let post = pool.iter().find(|p| p.id == candidate.post_id)?;
                Some(RelatedPost {
                    blog: post.summary(),
                    score: candidate.score,
                    shared_tags: shared_tag_ids(&candidate.shared_tags),
                })
            })
            .collect()
    }
}

/// Shared tag identifiers, deduplicated across kinds
fn shared_tag_ids(tags: &BTreeSet<TagRef>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.iter()
        .filter(|t| seen.insert(t.id.as_str()))
        .map(|t| t.id.clone())
        .collect()
}
