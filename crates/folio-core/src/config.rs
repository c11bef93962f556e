//! Store configuration for folio
//!
//! Configuration is stored in `.folio/config.toml`. Every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{FolioError, Result};

pub use types::{
    RateLimitConfig, RelatedConfig, StoreConfig, DEFAULT_RELATED_LIMIT, MAX_RELATED_LIMIT,
    MAX_WINDOW_SECS, STORE_FORMAT_VERSION,
};

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.version > STORE_FORMAT_VERSION {
            return Err(FolioError::InvalidStore {
                reason: format!(
                    "config version {} is newer than supported version {}",
                    self.version, STORE_FORMAT_VERSION
                ),
            });
        }
        if self.related.max_limit == 0 {
            return Err(FolioError::InvalidStore {
                reason: "related.max_limit must be at least 1".to_string(),
            });
        }
        if self.related.default_limit == 0 || self.related.default_limit > self.related.max_limit
        {
            return Err(FolioError::InvalidStore {
                reason: format!(
                    "related.default_limit must be between 1 and {}",
                    self.related.max_limit
                ),
            });
        }
        self.related
            .weights
            .validate()
            .map_err(|e| FolioError::InvalidStore {
                reason: e.to_string(),
            })?;
        if self.rate_limit.max_attempts == 0 {
            return Err(FolioError::InvalidStore {
                reason: "rate_limit.max_attempts must be positive".to_string(),
            });
        }
        if self.rate_limit.window_secs <= 0 || self.rate_limit.window_secs > MAX_WINDOW_SECS {
            return Err(FolioError::InvalidStore {
                reason: format!(
                    "rate_limit.window_secs must be between 1 and {}",
                    MAX_WINDOW_SECS
                ),
            });
        }
        Ok(())
    }
}
