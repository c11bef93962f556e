//! SQLite database schema for folio

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Tables created in an empty database
    Created,
    /// Older schema brought up to the current version
    Migrated { from: i32 },
    /// Schema already at the current version
    UpToDate,
}

const SCHEMA_SQL: &str = r#"
-- Blog posts
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    slug TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    body TEXT NOT NULL DEFAULT '',
    created TEXT
);

-- Tags, partitioned by kind (topic, technology, hashtag)
CREATE TABLE IF NOT EXISTS tags (
    kind TEXT NOT NULL,
    id TEXT NOT NULL,
    name TEXT NOT NULL,
    PRIMARY KEY (kind, id)
);

-- Post <-> tag assignments
CREATE TABLE IF NOT EXISTS post_tags (
    post_id INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    kind TEXT NOT NULL,
    tag_id TEXT NOT NULL,
    PRIMARY KEY (post_id, kind, tag_id),
    FOREIGN KEY (kind, tag_id) REFERENCES tags(kind, id)
);
CREATE INDEX IF NOT EXISTS idx_post_tags_tag ON post_tags(kind, tag_id);

-- Fixed-window login counters, reset_at in epoch milliseconds
CREATE TABLE IF NOT EXISTS rate_limits (
    identifier TEXT PRIMARY KEY,
    count INTEGER NOT NULL,
    reset_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_rate_limits_reset ON rate_limits(reset_at);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        Some(v) if v >= CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::UpToDate),
        Some(v) => {
            // v1 kept reset_at as RFC 3339 text; counters are transient
            conn.execute("DROP TABLE IF EXISTS rate_limits", [])?;
            conn.execute_batch(SCHEMA_SQL)?;
            set_schema_version(conn)?;
            Ok(SchemaCreateResult::Migrated { from: v })
        }
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            set_schema_version(conn)?;
            Ok(SchemaCreateResult::Created)
        }
    }
}

fn set_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
        [&CURRENT_SCHEMA_VERSION.to_string()],
    )?;
    Ok(())
}
