//! Blog posts and the tags attached to them

mod types;

pub use types::{Post, PostId, PostSummary, TagKind, TagRef};

use crate::error::{FolioError, Result};

/// Check that a slug is made of lowercase letters, digits and single hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Derive a slug from a title, or validate an explicit one
pub fn resolve_slug(title: &str, explicit: Option<&str>) -> Result<String> {
    match explicit {
        Some(raw) => {
            let slug = raw.trim();
            if !is_valid_slug(slug) {
                return Err(FolioError::validation(
                    "slug",
                    format!(
                        "'{}' must contain only lowercase letters, digits and hyphens",
                        slug
                    ),
                ));
            }
            Ok(slug.to_string())
        }
        None => {
            let slug = slug::slugify(title);
            if slug.is_empty() {
                return Err(FolioError::validation(
                    "title",
                    "cannot derive a slug from an empty title",
                ));
            }
            Ok(slug)
        }
    }
}

/// Normalize a tag name into its identifier
///
/// Hashtags may be written with a leading `#`. The identifier is slugified so
/// `Rust Lang` and `rust-lang` refer to the same tag.
pub fn normalize_tag_id(kind: TagKind, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let trimmed = match kind {
        TagKind::Hashtag => trimmed.trim_start_matches('#'),
        _ => trimmed,
    };
    let id = slug::slugify(trimmed);
    if id.is_empty() {
        return Err(FolioError::validation(
            &format!("{} tag", kind),
            format!("'{}' is empty after normalization", raw),
        ));
    }
    Ok(id)
}
