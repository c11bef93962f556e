//! `folio related` command - posts related to a source post

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use folio_core::error::Result;
use folio_core::records::{csv_or_dash, escape_quotes};
use folio_core::related::RelatedResponse;

/// Execute the related command
pub fn execute(ctx: &CommandContext, id: &str, limit: Option<i64>) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let response = store.related(id, limit)?;
    trace_command!(ctx.cli, ctx.start, "related");

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&response) },
        human => { print_human(&response, ctx.cli.quiet); },
        records => { print_records(id, &response); }
    )
}

fn print_human(response: &RelatedResponse, quiet: bool) {
    if response.related_blogs.is_empty() {
        if !quiet {
            println!("No related posts found");
        }
        return;
    }

    for related in &response.related_blogs {
        let shared = if related.shared_tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", related.shared_tags.join(", "))
        };
        println!(
            "{:>3}  {} ({}) {}{}",
            related.score, related.blog.id, related.blog.slug, related.blog.title, shared
        );
    }
}

fn print_records(source: &str, response: &RelatedResponse) {
    print_records_header(
        "related",
        &[
            ("source", source.trim().to_string()),
            ("total", response.total.to_string()),
        ],
    );
    for related in &response.related_blogs {
        println!(
            "B {} {} score={} shared={} \"{}\"",
            related.blog.id,
            related.blog.slug,
            related.score,
            csv_or_dash(&related.shared_tags),
            escape_quotes(&related.blog.title)
        );
    }
}
