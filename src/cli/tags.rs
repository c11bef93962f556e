use super::parse::parse_tag_kind;
use clap::Subcommand;
use folio_core::post::TagKind;

/// Tags subcommands
#[derive(Subcommand, Debug)]
pub enum TagsCommands {
    /// List tags with their usage counts
    List {
        /// Only tags of this kind (topic, technology, hashtag)
        #[arg(long, short, value_parser = parse_tag_kind)]
        kind: Option<TagKind>,
    },
}
