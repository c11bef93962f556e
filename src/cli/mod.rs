//! CLI argument parsing for folio
//!
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod format;
pub mod login;
pub mod output;
pub mod parse;
pub mod paths;
pub mod post;
pub mod tags;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::RelatedArgs;
pub use login::LoginCommands;
pub use output::OutputFormat;
pub use post::PostCommands;
pub use tags::TagsCommands;

/// Folio - content graph CLI for a portfolio blog
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse::parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, env = "FOLIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new folio store
    Init,

    /// Manage blog posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Inspect tags
    Tags {
        #[command(subcommand)]
        command: TagsCommands,
    },

    /// List posts related to a post
    Related(RelatedArgs),

    /// Exercise the login rate limiter
    Login {
        #[command(subcommand)]
        command: LoginCommands,
    },
}
