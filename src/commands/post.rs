//! `folio post` commands - add, list, show, tag and remove posts

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use folio_core::bail_usage;
use folio_core::error::Result;
use folio_core::post::{Post, TagKind, TagRef};
use folio_core::records::{csv_or_dash, escape_quotes};
use folio_core::store::{PostDraft, PostLinks};

/// Read the post body from `--body`, `--body-file` or stdin
pub fn read_body(body: Option<&str>, body_file: Option<&Path>, stdin: bool) -> Result<String> {
    if let Some(body) = body {
        return Ok(body.to_string());
    }
    if let Some(path) = body_file {
        return Ok(fs::read_to_string(path)?);
    }
    if stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(String::new())
}

/// Create a post
pub fn execute_add(
    ctx: &CommandContext,
    title: &str,
    slug: Option<String>,
    body: String,
    tags: Vec<(TagKind, String)>,
) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let draft = PostDraft {
        title: title.to_string(),
        slug,
        body,
        tags,
    };
    let post = store.create_post(&draft)?;
    trace_command!(ctx.cli, ctx.start, "create_post");

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&post) },
        human => {
            if ctx.cli.quiet {
                println!("{}", post.id);
            } else {
                println!("Created post {} ({})", post.id, post.slug);
            }
        },
        records => {
            print_records_header("post.add", &[("id", post.id.to_string())]);
            print_post_record(&post);
        }
    )
}

/// List posts, optionally only those with one tag
pub fn execute_list(ctx: &CommandContext, filter: Option<(TagKind, &str)>) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let posts = store.list_posts(filter)?;
    debug!(count = posts.len(), "list_posts");

    output_by_format_result!(ctx.cli.format,
        json => {
            let summaries: Vec<_> = posts.iter().map(Post::summary).collect();
            print_json(&summaries)
        },
        human => {
            if posts.is_empty() {
                if !ctx.cli.quiet {
                    println!("No posts found");
                }
            } else {
                for post in &posts {
                    println!("{:>4}  {:<32} {}", post.id, post.slug, post.title);
                }
            }
        },
        records => {
            print_records_header("post.list", &[("total", posts.len().to_string())]);
            for post in &posts {
                print_post_record(post);
            }
        }
    )
}

/// Show one post, with its in-site links when asked
pub fn execute_show(ctx: &CommandContext, id_or_slug: &str, with_links: bool) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let post = store.resolve_post(id_or_slug)?;
    let links = if with_links {
        Some(store.post_links(&post)?)
    } else {
        None
    };

    output_by_format_result!(ctx.cli.format,
        json => {
            let mut value = serde_json::to_value(&post)?;
            if let Some(links) = &links {
                value["links"] = serde_json::to_value(links)?;
            }
            print_json(&value)
        },
        human => { print_show_human(&post, links.as_ref()); },
        records => {
            print_records_header("post.show", &[("id", post.id.to_string())]);
            print_post_record(&post);
            if let Some(links) = &links {
                print_links_records(links);
            }
        }
    )
}

/// Attach (`add = true`) or detach tags
pub fn execute_tag(
    ctx: &CommandContext,
    id_or_slug: &str,
    tags: &[(TagKind, String)],
    add: bool,
) -> Result<()> {
    if tags.is_empty() {
        bail_usage!("at least one of --topic, --tech or --hashtag is required");
    }

    let store = ctx.discover_or_open_store()?;
    let post = store.resolve_post(id_or_slug)?;
    let changed = if add {
        store.tag_post(post.id, tags)?
    } else {
        store.untag_post(post.id, tags)?
    };
    let post = store.get_post(post.id)?;
    let action = if add { "tag" } else { "untag" };

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "id": post.id,
                "changed": changed,
                "tags": post.tags,
            }))
        },
        human => {
            if !ctx.cli.quiet {
                let verb = if add { "Added" } else { "Removed" };
                println!("{} {} tag(s) on post {}", verb, changed, post.id);
            }
        },
        records => {
            print_records_header(
                &format!("post.{}", action),
                &[("id", post.id.to_string()), ("changed", changed.to_string())],
            );
            print_post_record(&post);
        }
    )
}

/// Delete a post
pub fn execute_remove(ctx: &CommandContext, id_or_slug: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let post = store.resolve_post(id_or_slug)?;
    store.remove_post(post.id)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "status": "ok",
                "removed": post.summary(),
            }))
        },
        human => {
            if !ctx.cli.quiet {
                println!("Removed post {} ({})", post.id, post.slug);
            }
        },
        records => {
            print_records_header("post.remove", &[("id", post.id.to_string())]);
        }
    )
}

fn tag_ids(post: &Post, kind: TagKind) -> Vec<&str> {
    post.tags_of(kind).map(|t: &TagRef| t.id.as_str()).collect()
}

fn print_post_record(post: &Post) {
    println!(
        "B {} {} topics={} tech={} hashtags={} \"{}\"",
        post.id,
        post.slug,
        csv_or_dash(&tag_ids(post, TagKind::Topic)),
        csv_or_dash(&tag_ids(post, TagKind::Technology)),
        csv_or_dash(&tag_ids(post, TagKind::Hashtag)),
        escape_quotes(&post.title)
    );
}

fn print_links_records(links: &PostLinks) {
    for target in &links.outgoing {
        println!("L out {} {}", target.id, target.slug);
    }
    for slug in &links.unresolved {
        println!("L unresolved - {}", slug);
    }
    for source in &links.backlinks {
        println!("L back {} {}", source.id, source.slug);
    }
}

fn print_show_human(post: &Post, links: Option<&PostLinks>) {
    println!("{} ({})", post.title, post.slug);
    println!("id: {}", post.id);
    if let Some(created) = post.created {
        println!("created: {}", created.format("%Y-%m-%d %H:%M"));
    }
    for kind in TagKind::ALL {
        let ids = tag_ids(post, kind);
        if !ids.is_empty() {
            println!("{}: {}", kind, ids.join(", "));
        }
    }
    if !post.body.is_empty() {
        println!();
        println!("{}", post.body);
    }

    if let Some(links) = links {
        println!();
        println!("Links:");
        if links.outgoing.is_empty() && links.unresolved.is_empty() && links.backlinks.is_empty() {
            println!("  (none)");
        }
        for target in &links.outgoing {
            println!("  -> {} ({})", target.id, target.slug);
        }
        for slug in &links.unresolved {
            println!("  -> ? ({})", slug);
        }
        for source in &links.backlinks {
            println!("  <- {} ({})", source.id, source.slug);
        }
    }
}
