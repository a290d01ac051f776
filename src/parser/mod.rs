//! Document parsing (verb module)
//!
//! Transforms JSON text into metadata trees and structured filters.

use std::path::Path;

use crate::error::ParseError;
use crate::metadata::MetadataNode;
use crate::query::StructuredFilter;

/// Parse a metadata tree from a JSON file
pub fn parse_metadata_file<P: AsRef<Path>>(path: P) -> Result<MetadataNode, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_metadata_str(&contents)
}

/// Parse a metadata tree from a JSON string
pub fn parse_metadata_str(json: &str) -> Result<MetadataNode, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Parse a structured filter from raw translation-service output
///
/// The service is asked for bare JSON but often wraps it in markdown code
/// fences; fence lines are stripped before parsing. Anything that still
/// fails to parse is a fatal request error for the caller to surface.
pub fn parse_filter(raw: &str) -> Result<StructuredFilter, ParseError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(cleaned.trim()).map_err(ParseError::from)
}

/// Drop markdown fence lines (``` or ```json) from the response
fn strip_code_fences(raw: &str) -> String {
    raw.trim()
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataIndex;

    #[test]
    fn test_parse_metadata_fixture() {
        let tree = parse_metadata_file("test_data/title_iii_metadata.json").unwrap();
        let index = MetadataIndex::build(&tree);

        assert_eq!(index.label_for("NET_ACCESS"), Some("Internet Access (%)"));
        assert_eq!(index.label_for("MEALS_HOME"), Some("Home-Delivered Meals"));
        // Alternate source names also key the reverse mapping
        assert_eq!(index.text_to_code.get("T3_MEALS_CG").map(String::as_str), Some("MEALS_CONG"));
    }

    #[test]
    fn test_parse_filter_plain_json() {
        let filter = parse_filter(r#"{"years": [2020], "geography": ["State A"], "metrics": ["internet"]}"#).unwrap();

        assert_eq!(filter.years, vec![2020]);
        assert_eq!(filter.geography, vec!["State A"]);
        assert_eq!(filter.metrics, vec!["internet"]);
    }

    #[test]
    fn test_parse_filter_strips_code_fences() {
        let raw = "```json\n{\"years\": [2019], \"geography\": [\"State B\"], \"metrics\": [\"meals\"]}\n```";
        let filter = parse_filter(raw).unwrap();

        assert_eq!(filter.years, vec![2019]);
        assert_eq!(filter.geography, vec!["State B"]);
    }

    #[test]
    fn test_parse_filter_invalid_json() {
        let result = parse_filter("not json at all");
        assert!(matches!(result, Err(ParseError::Json { .. })));
    }

    #[test]
    fn test_parse_metadata_missing_file() {
        let result = parse_metadata_file("test_data/does_not_exist.json");
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }
}
