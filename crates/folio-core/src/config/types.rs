//! Configuration type definitions

use crate::related::Weights;
use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Default number of related posts returned when no limit is given
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Largest limit a caller may request
pub const MAX_RELATED_LIMIT: usize = 20;

/// Longest login window accepted, one year
pub const MAX_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Related-content query settings
    #[serde(default)]
    pub related: RelatedConfig,

    /// Login throttling settings
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

/// Configuration for related-post ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Limit used when the caller does not pass one
    #[serde(default = "default_related_limit")]
    pub default_limit: usize,

    /// Upper bound accepted for a requested limit
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Per-contribution weights
    #[serde(default)]
    pub weights: Weights,
}

/// Configuration for the fixed-window login limiter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Attempts allowed within one window
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Window length in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: i64,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

fn default_max_limit() -> usize {
    MAX_RELATED_LIMIT
}

fn default_max_attempts() -> u32 {
    5
}

fn default_window_secs() -> i64 {
    15 * 60
}

impl Default for RelatedConfig {
    fn default() -> Self {
        RelatedConfig {
            default_limit: default_related_limit(),
            max_limit: default_max_limit(),
            weights: Weights::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        RateLimitConfig {
            max_attempts: default_max_attempts(),
            window_secs: default_window_secs(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            related: RelatedConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}
