use serde::Deserialize;

/// One leaderboard as described by the page-embedded JSON payload
/// (`#leaderboard-data`), read once at initialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardDescriptor {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Tag vocabulary offered by the tag dropdown.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Columns whose fresh sort starts ascending.
    #[serde(default = "default_text_columns")]
    pub text_columns: Vec<String>,
    /// Column the board sorts by on activation and tab reset.
    #[serde(default = "default_sort_column")]
    pub default_sort: String,
}

fn default_text_columns() -> Vec<String> {
    vec!["model".to_string(), "org".to_string(), "date".to_string()]
}

fn default_sort_column() -> String {
    "resolved".to_string()
}

/// Parse the embedded descriptor list. A malformed payload surfaces as an
/// error for the caller to log; it never panics.
pub fn parse_descriptors(raw: &str) -> Result<Vec<BoardDescriptor>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_descriptor_with_defaults() {
        let boards = parse_descriptors(r#"[{"name": "swe_bench"}]"#).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "swe_bench");
        assert_eq!(boards[0].display_name, None);
        assert!(boards[0].tags.is_empty());
        assert_eq!(boards[0].text_columns, vec!["model", "org", "date"]);
        assert_eq!(boards[0].default_sort, "resolved");
    }

    #[test]
    fn parses_full_descriptor() {
        let raw = r#"[{
            "name": "swe_bench_lite",
            "display_name": "SWE-bench Lite",
            "tags": ["verified", "open-weights"],
            "text_columns": ["model", "date"],
            "default_sort": "score"
        }]"#;
        let boards = parse_descriptors(raw).unwrap();
        assert_eq!(boards[0].display_name.as_deref(), Some("SWE-bench Lite"));
        assert_eq!(boards[0].tags, vec!["verified", "open-weights"]);
        assert_eq!(boards[0].default_sort, "score");
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_panic() {
        assert!(parse_descriptors("not json").is_err());
        assert!(parse_descriptors(r#"{"name": "solo"}"#).is_err());
    }
}
