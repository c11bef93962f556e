//! Shared output helpers for commands

use serde::Serialize;

use folio_core::error::Result;

pub use crate::output_by_format_result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a records header line: `H folio=1 records=1 mode=<mode> <extra>`
pub fn print_records_header(mode: &str, extra: &[(&str, String)]) {
    let mut line = format!("H folio=1 records=1 mode={}", mode);
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, value));
    }
    println!("{}", line);
}
