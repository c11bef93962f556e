//! Command implementations for folio

pub mod dispatch;
pub mod format;
pub mod init;
pub mod login;
pub mod post;
pub mod related;
pub mod tags;
