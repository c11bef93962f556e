//! Folio Core Library
//!
//! Domain logic for the folio content graph: posts and their tags, in-site
//! link extraction, related-post ranking and login rate limiting.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod links;
pub mod logging;
pub mod post;
pub mod ratelimit;
pub mod records;
pub mod related;
pub mod store;
pub mod validate;
