//! Input validation for the related-content query
//!
//! Identifiers and limits are checked here so the engine only ever sees
//! well-formed input.

use crate::bail_validation;
use crate::config::RelatedConfig;
use crate::error::Result;
use crate::post::PostId;

/// Parse a post identifier: a positive integer
pub fn parse_post_id(raw: &str) -> Result<PostId> {
    let trimmed = raw.trim();
    match trimmed.parse::<PostId>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => bail_validation!("post id", format!("{} must be positive", trimmed)),
        Err(_) => bail_validation!(
            "post id",
            format!("'{}' is not an integer identifier", trimmed)
        ),
    }
}

/// Resolve the requested limit against the configured default and maximum
pub fn validate_limit(requested: Option<i64>, config: &RelatedConfig) -> Result<usize> {
    let limit = match requested {
        None => return Ok(config.default_limit),
        Some(limit) => limit,
    };
    if limit < 1 {
        bail_validation!("limit", format!("{} must be at least 1", limit));
    }
    if limit as u64 > config.max_limit as u64 {
        bail_validation!(
            "limit",
            format!("{} exceeds the maximum of {}", limit, config.max_limit)
        );
    }
    Ok(limit as usize)
}
