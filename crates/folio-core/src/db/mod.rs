//! SQLite database module for folio

mod posts;
mod ratelimit;
mod schema;
mod tags;

use crate::error::{FolioError, Result};
use rusqlite::Connection;
use std::path::Path;

pub use posts::NewPost;
pub use ratelimit::SqliteRateLimitStore;
pub use schema::{create_schema, CURRENT_SCHEMA_VERSION};
pub use tags::TagUsage;

/// File name of the database inside the store root
pub const DB_FILE: &str = "folio.db";

/// SQLite database for folio
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);
        let conn = Connection::open(&db_path).map_err(|e| {
            FolioError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| FolioError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| FolioError::Other(format!("failed to enable foreign keys: {}", e)))?;

        let created = create_schema(&conn)
            .map_err(|e| FolioError::Other(format!("failed to create database schema: {}", e)))?;
        match created {
            schema::SchemaCreateResult::Created => {
                tracing::debug!("created database schema v{}", CURRENT_SCHEMA_VERSION);
            }
            schema::SchemaCreateResult::Migrated { from } => {
                tracing::info!("migrated database schema v{} -> v{}", from, CURRENT_SCHEMA_VERSION);
            }
            schema::SchemaCreateResult::UpToDate => {}
        }

        Ok(Database { conn })
    }

    pub fn get_post_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM posts", [], |r| r.get(0))
            .map_err(|e| FolioError::Other(format!("failed to get post count: {}", e)))
    }

    pub fn get_schema_version(&self) -> Result<i32> {
        self.conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| FolioError::Other(format!("failed to get schema version: {}", e)))
    }

    /// Rate limit windows persisted in this database
    pub fn rate_limit_store(&self) -> SqliteRateLimitStore<'_> {
        SqliteRateLimitStore::new(&self.conn)
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Fold the WAL back so rapid sequential CLI invocations see every write
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
