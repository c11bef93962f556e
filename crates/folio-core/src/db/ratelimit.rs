use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use crate::error::{FolioError, Result};
use crate::map_db_err;
use crate::ratelimit::{RateLimitStore, WindowEntry};

/// Window counters kept in the store database, shared by every process
///
/// `reset_at` is stored as epoch milliseconds so expiry compares in SQL.
#[derive(Debug)]
pub struct SqliteRateLimitStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRateLimitStore<'a> {
    pub(super) fn new(conn: &'a Connection) -> Self {
        SqliteRateLimitStore { conn }
    }
}

fn reset_at_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| FolioError::Other(format!("invalid reset time: {}ms", millis)))
}

impl RateLimitStore for SqliteRateLimitStore<'_> {
    fn get(&self, identifier: &str) -> Result<Option<WindowEntry>> {
        let row: Option<(u32, i64)> = self
            .conn
            .query_row(
                "SELECT count, reset_at FROM rate_limits WHERE identifier = ?1",
                params![identifier],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()
            .map_err(|e| map_db_err!("read rate limit", e))?;

        row.map(|(count, reset_at)| {
            Ok(WindowEntry {
                count,
                reset_at: reset_at_from_millis(reset_at)?,
            })
        })
        .transpose()
    }

    fn put(&mut self, identifier: &str, entry: WindowEntry) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO rate_limits (identifier, count, reset_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(identifier) DO UPDATE SET count = excluded.count, reset_at = excluded.reset_at",
                params![identifier, entry.count, entry.reset_at.timestamp_millis()],
            )
            .map_err(|e| map_db_err!("write rate limit", e))?;
        Ok(())
    }

    fn remove(&mut self, identifier: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM rate_limits WHERE identifier = ?1",
                params![identifier],
            )
            .map_err(|e| map_db_err!("delete rate limit", e))?;
        Ok(removed > 0)
    }

    fn sweep(&mut self, now: DateTime<Utc>) -> Result<usize> {
        self.conn
            .execute(
                "DELETE FROM rate_limits WHERE reset_at <= ?1",
                params![now.timestamp_millis()],
            )
            .map_err(|e| map_db_err!("sweep rate limits", e))
    }

    /// Runs `f` under `BEGIN IMMEDIATE`, or inside the caller's open transaction
    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if !self.conn.is_autocommit() {
            return f(self);
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)
            .map_err(|e| map_db_err!("begin rate limit transaction", e))?;
        // Dropping `tx` on error rolls back
        let value = f(self)?;
        tx.commit()
            .map_err(|e| map_db_err!("commit rate limit transaction", e))?;
        Ok(value)
    }
}
