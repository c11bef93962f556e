use rusqlite::params;
use serde::Serialize;

use super::Database;
use crate::error::Result;
use crate::map_db_err;
use crate::post::{TagKind, TagRef};

/// A tag with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagUsage {
    #[serde(flatten)]
    pub tag: TagRef,
    pub name: String,
    pub count: i64,
}

impl Database {
    /// Tags with usage counts, most used first, optionally limited to one kind
    pub fn list_tags(&self, kind: Option<TagKind>) -> Result<Vec<TagUsage>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT t.kind, t.id, t.name, COUNT(pt.post_id) AS uses
                 FROM tags t
                 LEFT JOIN post_tags pt ON pt.kind = t.kind AND pt.tag_id = t.id
                 WHERE ?1 IS NULL OR t.kind = ?1
                 GROUP BY t.kind, t.id
                 ORDER BY uses DESC, t.kind, t.id",
            )
            .map_err(|e| map_db_err!("prepare tag listing", e))?;

        let rows = stmt
            .query_map(params![kind.map(|k| k.as_str())], |row| {
                let kind: String = row.get(0)?;
                let kind = kind.parse::<TagKind>().map_err(|_| {
                    rusqlite::Error::InvalidColumnType(0, kind, rusqlite::types::Type::Text)
                })?;
                Ok(TagUsage {
                    tag: TagRef::new(kind, row.get::<_, String>(1)?),
                    name: row.get(2)?,
                    count: row.get(3)?,
                })
            })
            .map_err(|e| map_db_err!("query tag listing", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read tag listing", e))
    }

    /// Drop tags that no post uses, returning how many were removed
    pub fn prune_unused_tags(&self) -> Result<usize> {
        self.conn
            .execute(
                "DELETE FROM tags WHERE NOT EXISTS (
                     SELECT 1 FROM post_tags pt WHERE pt.kind = tags.kind AND pt.tag_id = tags.id
                 )",
                [],
            )
            .map_err(|e| map_db_err!("prune tags", e))
    }
}

