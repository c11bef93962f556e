use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{RateLimitStore, WindowEntry};
use crate::error::Result;

/// In-process window store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, WindowEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RateLimitStore for MemoryStore {
    fn get(&self, identifier: &str) -> Result<Option<WindowEntry>> {
        Ok(self.entries.get(identifier).copied())
    }

    fn put(&mut self, identifier: &str, entry: WindowEntry) -> Result<()> {
        self.entries.insert(identifier.to_string(), entry);
        Ok(())
    }

    fn remove(&mut self, identifier: &str) -> Result<bool> {
        Ok(self.entries.remove(identifier).is_some())
    }

    fn sweep(&mut self, now: DateTime<Utc>) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        Ok(before - self.entries.len())
    }
}
