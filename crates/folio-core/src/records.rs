//! Utilities for records output format

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Join values as a comma separated field, `-` when empty
pub fn csv_or_dash<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"Say "hi""#), r#"Say \"hi\""#);
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn test_csv_or_dash() {
        let empty: [&str; 0] = [];
        assert_eq!(csv_or_dash(&empty), "-");
        assert_eq!(csv_or_dash(&["rust", "sqlite"]), "rust,sqlite");
    }
}
