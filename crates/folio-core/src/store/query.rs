//! Post, tag and related-content operations on the store

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use serde::Serialize;

use crate::db::{NewPost, SqliteRateLimitStore, TagUsage};
use crate::error::{FolioError, Result};
use crate::links::{resolve_links, LinkExtractor};
use crate::post::{normalize_tag_id, resolve_slug, Post, PostId, PostSummary, TagKind, TagRef};
use crate::ratelimit::FixedWindowLimiter;
use crate::related::{RelatedEngine, RelatedResponse};
use crate::validate::{parse_post_id, validate_limit};
use crate::trace_time;

use super::Store;

/// Input for creating a post
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub tags: Vec<(TagKind, String)>,
}

/// In-site links around one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLinks {
    /// Posts this post's body links to
    pub outgoing: Vec<PostSummary>,
    /// Linked slugs with no matching post
    pub unresolved: Vec<String>,
    /// Posts whose bodies link to this post
    pub backlinks: Vec<PostSummary>,
}

/// Normalize raw tag names, dropping duplicates
fn normalize_tags(tags: &[(TagKind, String)]) -> Result<Vec<(TagRef, String)>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for (kind, raw) in tags {
        let tag = TagRef::new(*kind, normalize_tag_id(*kind, raw)?);
        if seen.insert(tag.clone()) {
            let name = raw.trim().trim_start_matches('#').to_string();
            out.push((tag, name));
        }
    }
    Ok(out)
}

impl Store {
    /// Create a post from a draft
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(FolioError::validation("title", "must not be empty"));
        }

        let new_post = NewPost {
            slug: resolve_slug(title, draft.slug.as_deref())?,
            title: title.to_string(),
            body: draft.body.clone(),
            tags: normalize_tags(&draft.tags)?,
        };
        let id = self.db.insert_post(&new_post)?;
        self.get_post(id)
    }

    /// Get a post by id
    pub fn get_post(&self, id: PostId) -> Result<Post> {
        self.db.get_post(id)?.ok_or_else(|| FolioError::PostNotFound {
            id: id.to_string(),
        })
    }

    /// Look a post up by numeric id or by slug
    pub fn resolve_post(&self, id_or_slug: &str) -> Result<Post> {
        let key = id_or_slug.trim();
        let found = match key.parse::<PostId>() {
            Ok(id) => self.db.get_post(id)?,
            Err(_) => self.db.get_post_by_slug(key)?,
        };
        found.ok_or_else(|| FolioError::PostNotFound {
            id: key.to_string(),
        })
    }

    /// All posts ordered by id, optionally only those carrying one tag
    pub fn list_posts(&self, filter: Option<(TagKind, &str)>) -> Result<Vec<Post>> {
        let Some((kind, raw)) = filter else {
            return self.db.load_all_posts();
        };
        let tag = TagRef::new(kind, normalize_tag_id(kind, raw)?);
        let mut posts = Vec::new();
        for id in self.db.post_ids_with_tag(&tag)? {
            posts.extend(self.db.get_post(id)?);
        }
        Ok(posts)
    }

    /// Attach tags to a post, returning how many were new
    pub fn tag_post(&self, id: PostId, tags: &[(TagKind, String)]) -> Result<usize> {
        self.db.add_tags(id, &normalize_tags(tags)?)
    }

    /// Detach tags from a post, returning how many were removed
    pub fn untag_post(&self, id: PostId, tags: &[(TagKind, String)]) -> Result<usize> {
        let refs: Vec<TagRef> = normalize_tags(tags)?
            .into_iter()
            .map(|(tag, _)| tag)
            .collect();
        let removed = self.db.remove_tags(id, &refs)?;
        self.db.prune_unused_tags()?;
        Ok(removed)
    }

    /// Delete a post and prune tags nothing uses any more
    pub fn remove_post(&self, id: PostId) -> Result<()> {
        self.db.delete_post(id)?;
        self.db.prune_unused_tags()?;
        Ok(())
    }

    pub fn list_tags(&self, kind: Option<TagKind>) -> Result<Vec<TagUsage>> {
        self.db.list_tags(kind)
    }

    /// Related posts for `source_id`, best first.
    ///
    /// The identifier and limit are validated before any data is read.
    #[tracing::instrument(skip(self))]
    pub fn related(&self, source_id: &str, limit: Option<i64>) -> Result<RelatedResponse> {
        let start = Instant::now();
        let source_id = parse_post_id(source_id)?;
        let limit = validate_limit(limit, &self.config.related)?;

        let pool = self.db.load_all_posts()?;
        trace_time!(start, "load_snapshot", posts = pool.len());

        let source = pool
            .iter()
            .find(|p| p.id == source_id)
            .ok_or_else(|| FolioError::PostNotFound {
                id: source_id.to_string(),
            })?;

        let engine = RelatedEngine::new(self.config.related.weights)?;
        let related = engine.find_related(source, &pool, limit);
        trace_time!(start, "find_related", returned = related.len());

        Ok(RelatedResponse::new(related))
    }

    /// Outgoing links and backlinks of a post
    pub fn post_links(&self, post: &Post) -> Result<PostLinks> {
        let extractor = LinkExtractor::new()?;
        let pool = self.db.load_all_posts()?;
        let slug_to_id: HashMap<String, PostId> =
            pool.iter().map(|p| (p.slug.clone(), p.id)).collect();
        let by_id: HashMap<PostId, &Post> = pool.iter().map(|p| (p.id, p)).collect();

        let resolved = resolve_links(&extractor.extract(&post.body), &slug_to_id);
        let outgoing = resolved
            .resolved
            .iter()
            .filter_map(|(_, id)| by_id.get(id).map(|p| p.summary()))
            .collect();

        let backlinks = pool
            .iter()
            .filter(|p| p.id != post.id && extractor.extract(&p.body).contains(&post.slug))
            .map(Post::summary)
            .collect();

        Ok(PostLinks {
            outgoing,
            unresolved: resolved.unresolved,
            backlinks,
        })
    }

    /// Login limiter backed by the store database
    pub fn login_limiter(&self) -> Result<FixedWindowLimiter<SqliteRateLimitStore<'_>>> {
        FixedWindowLimiter::from_config(self.db.rate_limit_store(), &self.config.rate_limit)
    }
}
