use folio_core::format::OutputFormat;
use folio_core::post::TagKind;

/// Parse tag kind from string
pub fn parse_tag_kind(s: &str) -> std::result::Result<TagKind, String> {
    s.parse::<TagKind>().map_err(|e| e.to_string())
}

/// Parse the global `--format` value
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("yaml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_tag_kind_accepts_short_tech() {
        assert_eq!(parse_tag_kind("tech"), Ok(TagKind::Technology));
        assert!(parse_tag_kind("category").is_err());
    }
}
