//! `folio init` command - create a new store
//!
//! Idempotent: an existing config and database are kept as they are.

use crate::cli::paths::resolve_store_path;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use folio_core::error::Result;
use folio_core::store::Store;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let store = match cli.store.as_ref() {
        Some(path) => Store::init_at(&resolve_store_path(path, ctx.root))?,
        None => Store::init(ctx.root)?,
    };

    output_by_format_result!(cli.format,
        json => {
            print_json(&serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "message": "Store initialized"
            }))
        },
        human => {
            if !cli.quiet {
                println!("Initialized folio store at {}", store.root().display());
            }
        },
        records => {
            print_records_header(
                "init",
                &[
                    ("store", store.root().display().to_string()),
                    ("status", "ok".to_string()),
                ],
            );
        }
    )
}
