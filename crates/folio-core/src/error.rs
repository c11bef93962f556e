//! Error types and exit codes for folio
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid identifiers or limits)
//! - 3: Data/store error (missing store, unknown post or tag)
//! - 4: Refused by the login rate limiter

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the folio CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown post (3)
    Data = 3,
    /// Rate limited (4)
    RateLimited = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for FolioError {
    fn from(err: rusqlite::Error) -> Self {
        FolioError::Other(err.to_string())
    }
}

/// Errors that can occur during folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("post not found: {id}")]
    PostNotFound { id: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Rate limiter refusal (exit code 4)
    #[error("too many attempts for {identifier}; retry after {retry_after_secs}s")]
    RateLimited {
        identifier: String,
        retry_after_secs: i64,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        FolioError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a rejected input value
    pub fn validation(field: &str, reason: impl std::fmt::Display) -> Self {
        FolioError::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        FolioError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FolioError::UnknownFormat(_)
            | FolioError::UsageError(_)
            | FolioError::Validation { .. } => ExitCode::Usage,

            FolioError::StoreNotFound { .. }
            | FolioError::InvalidStore { .. }
            | FolioError::PostNotFound { .. }
            | FolioError::AlreadyExists { .. } => ExitCode::Data,

            FolioError::RateLimited { .. } => ExitCode::RateLimited,

            FolioError::Io(_)
            | FolioError::Json(_)
            | FolioError::Toml(_)
            | FolioError::FailedOperation { .. }
            | FolioError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FolioError::UnknownFormat(_) => "unknown_format",
            FolioError::UsageError(_) => "usage_error",
            FolioError::Validation { .. } => "validation_error",
            FolioError::StoreNotFound { .. } => "store_not_found",
            FolioError::InvalidStore { .. } => "invalid_store",
            FolioError::PostNotFound { .. } => "post_not_found",
            FolioError::AlreadyExists { .. } => "already_exists",
            FolioError::RateLimited { .. } => "rate_limited",
            FolioError::Io(_) => "io_error",
            FolioError::Json(_) => "json_error",
            FolioError::Toml(_) => "toml_error",
            FolioError::FailedOperation { .. } => "failed_operation",
            FolioError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            FolioError::Validation { field, .. } => {
                error_obj["field"] = serde_json::json!(field);
            }
            FolioError::RateLimited {
                retry_after_secs, ..
            } => {
                error_obj["retry_after_secs"] = serde_json::json!(retry_after_secs);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
