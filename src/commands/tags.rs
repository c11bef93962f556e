//! `folio tags list` command

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use folio_core::error::Result;
use folio_core::post::TagKind;
use folio_core::records::escape_quotes;

/// List tags with usage counts, most used first
pub fn execute_list(ctx: &CommandContext, kind: Option<TagKind>) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let tags = store.list_tags(kind)?;

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&tags) },
        human => {
            if tags.is_empty() {
                if !ctx.cli.quiet {
                    println!("No tags found");
                }
            } else {
                for usage in &tags {
                    println!("{:<10} {:<24} {}", usage.tag.kind, usage.tag.id, usage.count);
                }
            }
        },
        records => {
            print_records_header("tags", &[("total", tags.len().to_string())]);
            for usage in &tags {
                println!(
                    "T {} {} count={} \"{}\"",
                    usage.tag.kind,
                    usage.tag.id,
                    usage.count,
                    escape_quotes(&usage.name)
                );
            }
        }
    )
}
