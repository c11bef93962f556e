//! In-site link extraction from post bodies
//!
//! A post references another post through `/blog/<slug>`. The same anchor
//! appears in a bare path, an HTML attribute (`href="/blog/<slug>"`) and a
//! Markdown link target (`](/blog/<slug>)`), so one pattern covers all three
//! and a reference is never counted twice.

use std::collections::{BTreeSet, HashMap};

use regex::Regex;

use crate::error::{FolioError, Result};
use crate::post::PostId;

/// ASCII-only case folding; Unicode folding would let `\u{212A}` (Kelvin sign)
/// and `\u{17F}` (long s) pass as slug characters
const BLOG_LINK_PATTERN: &str = r"(?i-u)/blog/([a-z0-9][a-z0-9-]*)";

/// Compiled link matcher, built once per query
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    re: Regex,
}

impl LinkExtractor {
    pub fn new() -> Result<Self> {
        let re = Regex::new(BLOG_LINK_PATTERN)
            .map_err(|e| FolioError::Other(format!("failed to compile link regex: {}", e)))?;
        Ok(LinkExtractor { re })
    }

    /// Extract the deduplicated set of slugs referenced by `body`
    pub fn extract(&self, body: &str) -> BTreeSet<String> {
        self.re
            .captures_iter(body)
            .filter_map(|cap| {
                let slug = cap[1].trim_end_matches('-').to_ascii_lowercase();
                (!slug.is_empty()).then_some(slug)
            })
            .collect()
    }
}

/// Extract referenced slugs with a freshly compiled matcher
pub fn extract_blog_links(body: &str) -> Result<BTreeSet<String>> {
    Ok(LinkExtractor::new()?.extract(body))
}

/// Outgoing links of a post split into known posts and dangling slugs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLinks {
    pub resolved: Vec<(String, PostId)>,
    pub unresolved: Vec<String>,
}

/// Resolve extracted slugs against the store's slug index
pub fn resolve_links(
    slugs: &BTreeSet<String>,
    slug_to_id: &HashMap<String, PostId>,
) -> ResolvedLinks {
    let mut out = ResolvedLinks::default();
    for slug in slugs {
        match slug_to_id.get(slug) {
            Some(id) => out.resolved.push((slug.clone(), *id)),
            None => out.unresolved.push(slug.clone()),
        }
    }
    out
}
