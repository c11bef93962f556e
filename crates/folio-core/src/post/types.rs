use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Database identifier of a post
pub type PostId = i64;

/// Category a tag belongs to; decides its weight bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Topic,
    Technology,
    Hashtag,
}

impl TagKind {
    /// All valid tag kinds
    pub const VALID_KINDS: &'static [&'static str] = &["topic", "technology", "hashtag"];

    pub const ALL: [TagKind; 3] = [TagKind::Topic, TagKind::Technology, TagKind::Hashtag];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Topic => "topic",
            TagKind::Technology => "technology",
            TagKind::Hashtag => "hashtag",
        }
    }
}

impl FromStr for TagKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "topic" => Ok(TagKind::Topic),
            "technology" | "tech" => Ok(TagKind::Technology),
            "hashtag" => Ok(TagKind::Hashtag),
            other => Err(FolioError::validation(
                "tag kind",
                format!("{} (expected: {})", other, Self::VALID_KINDS.join(", ")),
            )),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag's identity and its category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TagRef {
    pub kind: TagKind,
    pub id: String,
}

impl TagRef {
    pub fn new(kind: TagKind, id: impl Into<String>) -> Self {
        TagRef {
            kind,
            id: id.into(),
        }
    }

    pub fn topic(id: impl Into<String>) -> Self {
        Self::new(TagKind::Topic, id)
    }

    pub fn technology(id: impl Into<String>) -> Self {
        Self::new(TagKind::Technology, id)
    }

    pub fn hashtag(id: impl Into<String>) -> Self {
        Self::new(TagKind::Hashtag, id)
    }
}

impl fmt::Display for TagRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A blog post as seen by the related-content engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub tags: BTreeSet<TagRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(id: PostId, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Post {
            id,
            slug: slug.into(),
            title: title.into(),
            body: String::new(),
            tags: BTreeSet::new(),
            created: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tag(mut self, tag: TagRef) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Tags of one kind, in id order
    pub fn tags_of(&self, kind: TagKind) -> impl Iterator<Item = &TagRef> {
        self.tags.iter().filter(move |t| t.kind == kind)
    }

    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }
}

/// The identifying fields of a post used in listings and related results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub slug: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_kind_parsing() {
        assert_eq!("topic".parse::<TagKind>().unwrap(), TagKind::Topic);
        assert_eq!("Tech".parse::<TagKind>().unwrap(), TagKind::Technology);
        assert_eq!("hashtag".parse::<TagKind>().unwrap(), TagKind::Hashtag);
        assert!("category".parse::<TagKind>().is_err());
    }

    #[test]
    fn test_tags_of_partitions_by_kind() {
        let post = Post::new(1, "p", "P")
            .with_tag(TagRef::topic("web"))
            .with_tag(TagRef::technology("rust"))
            .with_tag(TagRef::hashtag("rust"));

        let techs: Vec<_> = post.tags_of(TagKind::Technology).collect();
        assert_eq!(techs, vec![&TagRef::technology("rust")]);
        assert_eq!(post.tags_of(TagKind::Topic).count(), 1);
        assert_eq!(post.tags.len(), 3);
    }
}
