//! Post subcommands

use super::args::TagArgs;
use clap::{ArgGroup, Subcommand};
use std::path::PathBuf;

/// Post subcommands
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Add a new post
    #[command(group(ArgGroup::new("body_source").args(["body", "body_file", "stdin"])))]
    Add {
        /// Post title
        title: String,

        /// Explicit slug (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Post body text
        #[arg(long)]
        body: Option<String>,

        /// Read the post body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Read the post body from stdin
        #[arg(long)]
        stdin: bool,

        #[command(flatten)]
        tags: TagArgs,
    },

    /// List posts
    #[command(group(ArgGroup::new("filter").args(["topic", "tech", "hashtag"])))]
    List {
        /// Only posts with this topic
        #[arg(long)]
        topic: Option<String>,

        /// Only posts with this technology
        #[arg(long)]
        tech: Option<String>,

        /// Only posts with this hashtag
        #[arg(long)]
        hashtag: Option<String>,
    },

    /// Show a post
    Show {
        /// Post ID or slug
        id_or_slug: String,

        /// Show outgoing links and backlinks
        #[arg(long)]
        links: bool,
    },

    /// Attach tags to a post
    Tag {
        /// Post ID or slug
        id_or_slug: String,

        #[command(flatten)]
        tags: TagArgs,
    },

    /// Detach tags from a post
    Untag {
        /// Post ID or slug
        id_or_slug: String,

        #[command(flatten)]
        tags: TagArgs,
    },

    /// Delete a post
    Remove {
        /// Post ID or slug
        id_or_slug: String,
    },
}
