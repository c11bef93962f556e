//! `folio login` commands - drive the persisted login rate limiter

use chrono::Utc;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use folio_core::error::Result;

/// Record one attempt; refused attempts surface as `RateLimited`
pub fn execute_attempt(ctx: &CommandContext, identifier: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let now = Utc::now();
    let mut limiter = store.login_limiter()?;

    // Expired windows are swept on every attempt
    limiter.sweep(now)?;
    let decision = limiter.check(identifier, now)?.into_result(identifier, now)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "identifier": identifier,
                "allowed": decision.allowed,
                "remaining": decision.remaining,
                "reset_at": decision.reset_at.to_rfc3339(),
            }))
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "Attempt allowed for {} ({} remaining until {})",
                    identifier,
                    decision.remaining,
                    decision.reset_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
        },
        records => {
            print_records_header(
                "login.attempt",
                &[
                    ("identifier", identifier.to_string()),
                    ("allowed", decision.allowed.to_string()),
                    ("remaining", decision.remaining.to_string()),
                ],
            );
        }
    )
}

/// Clear the window for one identifier
pub fn execute_reset(ctx: &CommandContext, identifier: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let removed = store.login_limiter()?.reset(identifier)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "identifier": identifier,
                "reset": removed,
            }))
        },
        human => {
            if !ctx.cli.quiet {
                if removed {
                    println!("Cleared attempts for {}", identifier);
                } else {
                    println!("No attempts recorded for {}", identifier);
                }
            }
        },
        records => {
            print_records_header(
                "login.reset",
                &[
                    ("identifier", identifier.to_string()),
                    ("reset", removed.to_string()),
                ],
            );
        }
    )
}

/// Drop every expired window
pub fn execute_sweep(ctx: &CommandContext) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let removed = store.login_limiter()?.sweep(Utc::now())?;

    output_by_format_result!(ctx.cli.format,
        json => { print_json(&serde_json::json!({ "removed": removed })) },
        human => {
            if !ctx.cli.quiet {
                println!("Removed {} expired window(s)", removed);
            }
        },
        records => {
            print_records_header("login.sweep", &[("removed", removed.to_string())]);
        }
    )
}
