//! Routing from parsed subcommands to their implementations

use crate::cli::{Commands, LoginCommands, PostCommands, TagsCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{init, login, post, related, tags};
use folio_core::error::Result;
use folio_core::post::TagKind;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => init::execute(ctx),
            Commands::Post { command } => execute_post(ctx, command),
            Commands::Tags { command } => match command {
                TagsCommands::List { kind } => tags::execute_list(ctx, *kind),
            },
            Commands::Related(args) => related::execute(ctx, &args.id, args.limit),
            Commands::Login { command } => execute_login(ctx, command),
        }
    }
}

fn execute_post(ctx: &CommandContext, command: &PostCommands) -> Result<()> {
    match command {
        PostCommands::Add {
            title,
            slug,
            body,
            body_file,
            stdin,
            tags,
        } => {
            let body = post::read_body(body.as_deref(), body_file.as_deref(), *stdin)?;
            post::execute_add(ctx, title, slug.clone(), body, tags.to_pairs())
        }
        PostCommands::List {
            topic,
            tech,
            hashtag,
        } => {
            let filter = [
                (TagKind::Topic, topic),
                (TagKind::Technology, tech),
                (TagKind::Hashtag, hashtag),
            ]
            .into_iter()
            .find_map(|(kind, value)| value.as_deref().map(|v| (kind, v)));
            post::execute_list(ctx, filter)
        }
        PostCommands::Show { id_or_slug, links } => post::execute_show(ctx, id_or_slug, *links),
        PostCommands::Tag { id_or_slug, tags } => {
            post::execute_tag(ctx, id_or_slug, &tags.to_pairs(), true)
        }
        PostCommands::Untag { id_or_slug, tags } => {
            post::execute_tag(ctx, id_or_slug, &tags.to_pairs(), false)
        }
        PostCommands::Remove { id_or_slug } => post::execute_remove(ctx, id_or_slug),
    }
}

fn execute_login(ctx: &CommandContext, command: &LoginCommands) -> Result<()> {
    match command {
        LoginCommands::Attempt { identifier } => login::execute_attempt(ctx, identifier),
        LoginCommands::Reset { identifier } => login::execute_reset(ctx, identifier),
        LoginCommands::Sweep => login::execute_sweep(ctx),
    }
}
