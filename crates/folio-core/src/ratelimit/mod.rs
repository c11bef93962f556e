//! Fixed-window rate limiting for login attempts
//!
//! Counters live in a [`RateLimitStore`] keyed by client identifier so the
//! limiter can run against process memory or a shared database.

mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::RateLimitConfig;
use crate::error::{FolioError, Result};

/// Attempt counter for one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

impl WindowEntry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.reset_at
    }
}

/// Backing storage for window counters
pub trait RateLimitStore {
    fn get(&self, identifier: &str) -> Result<Option<WindowEntry>>;

    fn put(&mut self, identifier: &str, entry: WindowEntry) -> Result<()>;

    /// Returns whether an entry was removed
    fn remove(&mut self, identifier: &str) -> Result<bool>;

    /// Drop every expired window, returning how many were removed
    fn sweep(&mut self, now: DateTime<Utc>) -> Result<usize>;

    /// Run `f` so no other writer interleaves with its reads and writes
    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        f(self)
    }
}

/// Outcome of one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateLimitDecision {
    /// Whole seconds until the window resets, never negative
    pub fn retry_after_secs(&self, now: DateTime<Utc>) -> i64 {
        let secs = (self.reset_at - now).num_milliseconds();
        ((secs + 999) / 1000).max(0)
    }

    /// Turn a refusal into [`FolioError::RateLimited`]
    pub fn into_result(self, identifier: &str, now: DateTime<Utc>) -> Result<Self> {
        if self.allowed {
            Ok(self)
        } else {
            Err(FolioError::RateLimited {
                identifier: identifier.to_string(),
                retry_after_secs: self.retry_after_secs(now),
            })
        }
    }
}

/// Fixed-window limiter over an injectable store
#[derive(Debug)]
pub struct FixedWindowLimiter<S> {
    store: S,
    max_attempts: u32,
    window: Duration,
}

impl<S: RateLimitStore> FixedWindowLimiter<S> {
    pub fn new(store: S, max_attempts: u32, window: Duration) -> Self {
        FixedWindowLimiter {
            store,
            max_attempts,
            window,
        }
    }

    pub fn from_config(store: S, config: &RateLimitConfig) -> Result<Self> {
        let window = Duration::try_seconds(config.window_secs)
            .filter(|w| *w > Duration::zero())
            .ok_or_else(|| {
                FolioError::validation(
                    "rate_limit.window_secs",
                    format!("{} is out of range", config.window_secs),
                )
            })?;
        Ok(Self::new(store, config.max_attempts, window))
    }

    /// Record an attempt for `identifier` at `now`.
    ///
    /// Refused attempts do not extend or increment the window. The read and
    /// write happen inside one [`RateLimitStore::atomically`] call.
    pub fn check(&mut self, identifier: &str, now: DateTime<Utc>) -> Result<RateLimitDecision> {
        let (max_attempts, window) = (self.max_attempts, self.window);
        let decision = self
            .store
            .atomically(|store| apply_attempt(store, identifier, now, max_attempts, window))?;

        debug!(
            identifier,
            allowed = decision.allowed,
            remaining = decision.remaining,
            "rate limit check"
        );
        Ok(decision)
    }

    /// Forget the window for `identifier`, e.g. after a successful login
    pub fn reset(&mut self, identifier: &str) -> Result<bool> {
        self.store.remove(identifier)
    }

    pub fn sweep(&mut self, now: DateTime<Utc>) -> Result<usize> {
        let removed = self.store.sweep(now)?;
        if removed > 0 {
            debug!(removed, "swept expired rate limit windows");
        }
        Ok(removed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn apply_attempt<S: RateLimitStore>(
    store: &mut S,
    identifier: &str,
    now: DateTime<Utc>,
    max_attempts: u32,
    window: Duration,
) -> Result<RateLimitDecision> {
    match store.get(identifier)? {
        Some(entry) if !entry.is_expired(now) => {
            if entry.count >= max_attempts {
                return Ok(RateLimitDecision {
                    allowed: false,
                    remaining: 0,
                    reset_at: entry.reset_at,
                });
            }
            let updated = WindowEntry {
                count: entry.count + 1,
                reset_at: entry.reset_at,
            };
            store.put(identifier, updated)?;
            Ok(RateLimitDecision {
                allowed: true,
                remaining: max_attempts - updated.count,
                reset_at: updated.reset_at,
            })
        }
        _ => {
            let reset_at = now.checked_add_signed(window).ok_or_else(|| {
                FolioError::Other(format!("rate limit window overflows from {}", now))
            })?;
            let fresh = WindowEntry { count: 1, reset_at };
            store.put(identifier, fresh)?;
            Ok(RateLimitDecision {
                allowed: true,
                remaining: max_attempts.saturating_sub(1),
                reset_at,
            })
        }
    }
}
