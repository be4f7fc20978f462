use std::collections::{BTreeSet, HashMap};

/// One leaderboard row, parsed once at load from the pre-rendered markup.
///
/// `visible` is derived state: every refresh pass rewrites it before anything
/// reads it. Row identity is positional: a row keeps the index it was
/// assigned at load, and sorting only permutes the display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub category: String,
    pub tags: BTreeSet<String>,
    pub values: HashMap<String, String>,
    pub footnote: Option<String>,
    pub visible: bool,
}

impl Row {
    pub fn new(
        category: impl Into<String>,
        tags: BTreeSet<String>,
        values: HashMap<String, String>,
        footnote: Option<String>,
    ) -> Self {
        Self {
            category: category.into(),
            tags,
            values,
            // Treat an empty footnote attribute the same as an absent one.
            footnote: footnote.filter(|text| !text.is_empty()),
            visible: true,
        }
    }

    /// Split a comma-joined tag attribute into the tag set.
    /// Whitespace around entries is not significant; empty entries are dropped.
    pub fn parse_tags(raw: &str) -> BTreeSet<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Raw sortable value for `column`; a missing attribute reads as empty
    /// and falls through to string comparison.
    pub fn value(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_splits_and_trims() {
        let tags = Row::parse_tags("open-weights, reasoning ,tool-use");
        assert_eq!(
            tags,
            BTreeSet::from([
                "open-weights".to_string(),
                "reasoning".to_string(),
                "tool-use".to_string(),
            ])
        );
    }

    #[test]
    fn parse_tags_of_empty_attribute_is_empty() {
        assert!(Row::parse_tags("").is_empty());
        assert!(Row::parse_tags(" , ,").is_empty());
    }

    #[test]
    fn empty_footnote_attribute_reads_as_none() {
        let row = Row::new("proprietary", BTreeSet::new(), HashMap::new(), Some(String::new()));
        assert_eq!(row.footnote, None);
    }

    #[test]
    fn missing_column_value_reads_as_empty() {
        let row = Row::new("proprietary", BTreeSet::new(), HashMap::new(), None);
        assert_eq!(row.value("resolved"), "");
    }
}
