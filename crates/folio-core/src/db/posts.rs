use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::Database;
use crate::error::{FolioError, Result};
use crate::map_db_err;
use crate::post::{Post, PostId, TagKind, TagRef};

/// A post about to be inserted; tags are already normalized
#[derive(Debug, Clone)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub body: String,
    /// Normalized tag with the name it was entered as
    pub tags: Vec<(TagRef, String)>,
}

fn parse_datetime(value: Option<String>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_kind(raw: &str) -> rusqlite::Result<TagKind> {
    raw.parse().map_err(|_| {
        rusqlite::Error::InvalidColumnType(0, format!("kind {}", raw), rusqlite::types::Type::Text)
    })
}

/// Insert a tag row if missing and attach it to a post
pub(super) fn attach_tag(
    conn: &Connection,
    post_id: PostId,
    tag: &TagRef,
    name: &str,
) -> Result<bool> {
    conn.execute(
        "INSERT OR IGNORE INTO tags (kind, id, name) VALUES (?1, ?2, ?3)",
        params![tag.kind.as_str(), &tag.id, name],
    )
    .map_err(|e| map_db_err!("insert tag", e))?;
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO post_tags (post_id, kind, tag_id) VALUES (?1, ?2, ?3)",
            params![post_id, tag.kind.as_str(), &tag.id],
        )
        .map_err(|e| map_db_err!("attach tag", e))?;
    Ok(inserted > 0)
}

fn load_tags(conn: &Connection, post_id: PostId) -> Result<BTreeSet<TagRef>> {
    let mut stmt = conn
        .prepare("SELECT kind, tag_id FROM post_tags WHERE post_id = ?1")
        .map_err(|e| map_db_err!("prepare tag query", e))?;
    let rows = stmt
        .query_map(params![post_id], |row| {
            let kind: String = row.get(0)?;
            let id: String = row.get(1)?;
            Ok(TagRef::new(parse_kind(&kind)?, id))
        })
        .map_err(|e| map_db_err!("query tags", e))?;

    rows.collect::<rusqlite::Result<BTreeSet<_>>>()
        .map_err(|e| map_db_err!("read tags", e))
}

impl Database {
    /// Insert a post with its tags in one transaction
    #[tracing::instrument(skip(self, post), fields(slug = %post.slug))]
    pub fn insert_post(&self, post: &NewPost) -> Result<PostId> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin insert transaction", e))?;

        let exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM posts WHERE slug = ?1)",
                params![&post.slug],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("check slug", e))?;
        if exists {
            return Err(FolioError::already_exists("post slug", &post.slug));
        }

        tx.execute(
            "INSERT INTO posts (slug, title, body, created) VALUES (?1, ?2, ?3, ?4)",
            params![&post.slug, &post.title, &post.body, Utc::now().to_rfc3339()],
        )
        .map_err(|e| map_db_err!("insert post", e))?;
        let id = tx.last_insert_rowid();

        for (tag, name) in &post.tags {
            attach_tag(&tx, id, tag, name)?;
        }

        tx.commit()
            .map_err(|e| map_db_err!("commit insert transaction", e))?;
        tracing::debug!(post_id = id, tags = post.tags.len(), "inserted post");
        Ok(id)
    }

    pub fn get_post(&self, id: PostId) -> Result<Option<Post>> {
        self.get_post_where("id = ?1", params![id])
    }

    pub fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        self.get_post_where("slug = ?1", params![slug])
    }

    fn get_post_where(&self, predicate: &str, args: &[&dyn rusqlite::ToSql]) -> Result<Option<Post>> {
        let sql = format!(
            "SELECT id, slug, title, body, created FROM posts WHERE {}",
            predicate
        );
        let row = self
            .conn
            .query_row(&sql, args, |row| {
                Ok((
                    row.get::<_, PostId>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })
            .optional()
            .map_err(|e| map_db_err!("read post", e))?;

        match row {
            Some((id, slug, title, body, created)) => Ok(Some(Post {
                id,
                slug,
                title,
                body,
                tags: load_tags(&self.conn, id)?,
                created: parse_datetime(created),
            })),
            None => Ok(None),
        }
    }

    /// Every post with its tag set, ordered by id.
    ///
    /// Read inside one transaction so the candidate pool is a consistent snapshot.
    #[tracing::instrument(skip(self))]
    pub fn load_all_posts(&self) -> Result<Vec<Post>> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin snapshot transaction", e))?;

        let mut posts: Vec<Post> = {
            let mut stmt = tx
                .prepare("SELECT id, slug, title, body, created FROM posts ORDER BY id")
                .map_err(|e| map_db_err!("prepare post query", e))?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Post {
                        id: row.get(0)?,
                        slug: row.get(1)?,
                        title: row.get(2)?,
                        body: row.get(3)?,
                        tags: BTreeSet::new(),
                        created: parse_datetime(row.get(4)?),
                    })
                })
                .map_err(|e| map_db_err!("query posts", e))?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
                .map_err(|e| map_db_err!("read posts", e))?
        };

        let position: HashMap<PostId, usize> =
            posts.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

        {
            let mut stmt = tx
                .prepare("SELECT post_id, kind, tag_id FROM post_tags")
                .map_err(|e| map_db_err!("prepare tag query", e))?;
            let rows = stmt
                .query_map([], |row| {
                    let post_id: PostId = row.get(0)?;
                    let kind: String = row.get(1)?;
                    let id: String = row.get(2)?;
                    Ok((post_id, TagRef::new(parse_kind(&kind)?, id)))
                })
                .map_err(|e| map_db_err!("query tags", e))?;
            for row in rows {
                let (post_id, tag) = row.map_err(|e| map_db_err!("read tags", e))?;
                if let Some(&i) = position.get(&post_id) {
                    posts[i].tags.insert(tag);
                }
            }
        }

        tx.commit()
            .map_err(|e| map_db_err!("finish snapshot transaction", e))?;
        tracing::debug!(posts = posts.len(), "loaded post snapshot");
        Ok(posts)
    }

    /// Post ids tagged with `tag`, ordered by id
    pub fn post_ids_with_tag(&self, tag: &TagRef) -> Result<Vec<PostId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT post_id FROM post_tags WHERE kind = ?1 AND tag_id = ?2 ORDER BY post_id")
            .map_err(|e| map_db_err!("prepare tag filter", e))?;
        let rows = stmt
            .query_map(params![tag.kind.as_str(), &tag.id], |row| row.get(0))
            .map_err(|e| map_db_err!("query tag filter", e))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read tag filter", e))
    }

    /// Attach tags to an existing post, returning how many were new
    pub fn add_tags(&self, post_id: PostId, tags: &[(TagRef, String)]) -> Result<usize> {
        self.require_post(post_id)?;
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin tag transaction", e))?;
        let mut added = 0;
        for (tag, name) in tags {
            if attach_tag(&tx, post_id, tag, name)? {
                added += 1;
            }
        }
        tx.commit()
            .map_err(|e| map_db_err!("commit tag transaction", e))?;
        Ok(added)
    }

    /// Detach tags from a post, returning how many were removed
    pub fn remove_tags(&self, post_id: PostId, tags: &[TagRef]) -> Result<usize> {
        self.require_post(post_id)?;
        let mut removed = 0;
        for tag in tags {
            removed += self
                .conn
                .execute(
                    "DELETE FROM post_tags WHERE post_id = ?1 AND kind = ?2 AND tag_id = ?3",
                    params![post_id, tag.kind.as_str(), &tag.id],
                )
                .map_err(|e| map_db_err!("detach tag", e))?;
        }
        Ok(removed)
    }

    /// Delete a post; its tag assignments cascade
    pub fn delete_post(&self, post_id: PostId) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1", params![post_id])
            .map_err(|e| map_db_err!("delete post", e))?;
        if deleted == 0 {
            return Err(FolioError::PostNotFound {
                id: post_id.to_string(),
            });
        }
        Ok(())
    }

    fn require_post(&self, post_id: PostId) -> Result<()> {
        let exists: bool = self
            .conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)",
                params![post_id],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("check post", e))?;
        if exists {
            Ok(())
        } else {
            Err(FolioError::PostNotFound {
                id: post_id.to_string(),
            })
        }
    }
}
