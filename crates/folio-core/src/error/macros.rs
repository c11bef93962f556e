//! Error macros for folio

/// Macro for returning a validation error
#[macro_export]
macro_rules! bail_validation {
    ($field:expr, $reason:expr) => {
        return Err($crate::error::FolioError::validation($field, $reason))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::FolioError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping database errors
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::FolioError::db_operation($op, $error)
    };
}
