//! Folio - content graph CLI for a portfolio blog
//!
//! Stores posts with topic, technology and hashtag tags, ranks related
//! posts by weighted overlap, and guards logins with a fixed-window limiter.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use folio_core::error::{ExitCode as FolioExitCode, FolioError};
use folio_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_on_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_code(FolioExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: FolioExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Print a command failure in the shape the caller asked for
fn report(cli: &Cli, error: &FolioError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
}

/// Parse failures happen before `Cli.format` exists, so a JSON caller is
/// detected from raw argv. Help and version output always go through clap.
fn exit_on_parse_error(err: clap::Error) -> ExitCode {
    let passthrough = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if passthrough || !json_requested(env::args().skip(1)) {
        err.exit();
    }

    let error = folio_error_from_clap(&err);
    eprintln!("{}", error.to_json());
    exit_code(error.exit_code())
}

/// Bad invocations are usage errors; anything else clap reports is generic
fn folio_error_from_clap(err: &clap::Error) -> FolioError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => FolioError::UsageError(err.to_string()),
        _ => FolioError::Other(err.to_string()),
    }
}

/// Whether argv selects `--format json` in either spelling
fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut previous_was_flag = false;
    for arg in args {
        if arg == "--format=json" || (previous_was_flag && arg == "json") {
            return true;
        }
        previous_was_flag = arg == "--format";
    }
    false
}
