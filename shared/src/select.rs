use std::collections::BTreeSet;

/// Selection set of a multi-select control.
///
/// `All` is a sentinel, not a union: it never coexists with concrete items.
/// `Items` with an empty set is a valid state meaning "nothing selected";
/// it is not collapsed back to `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Items(BTreeSet<String>),
}

impl Selection {
    pub fn empty() -> Self {
        Self::Items(BTreeSet::new())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether the checkbox for `item` renders checked. Under `All` every
    /// option is shown checked.
    pub fn shows_checked(&self, item: &str) -> bool {
        match self {
            Self::All => true,
            Self::Items(items) => items.contains(item),
        }
    }

    /// Whether a row with `tags` passes this selection.
    /// Under `Items`, a row passes iff the intersection is non-empty, so an
    /// untagged row never passes a concrete selection.
    pub fn admits_any(&self, tags: &BTreeSet<String>) -> bool {
        match self {
            Self::All => true,
            Self::Items(items) => tags.iter().any(|tag| items.contains(tag)),
        }
    }

    /// The "All" checkbox was toggled: checked collapses the selection to the
    /// sentinel, unchecked clears it entirely.
    pub fn toggle_all(&mut self, checked: bool) {
        *self = if checked { Self::All } else { Self::empty() };
    }

    /// A concrete item checkbox was toggled. Checking an item displaces the
    /// sentinel; unchecking never restores it.
    pub fn toggle_item(&mut self, item: &str, checked: bool) {
        match self {
            Self::All => {
                if checked {
                    *self = Self::Items(BTreeSet::from([item.to_string()]));
                }
                // Unchecking an item that is not a member of {all} is a no-op.
            }
            Self::Items(items) => {
                if checked {
                    items.insert(item.to_string());
                } else {
                    items.remove(item);
                }
            }
        }
    }

    /// Summary shown in the toggle button label: "All", "None", or the count.
    pub fn summary(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Items(items) if items.is_empty() => "None".to_string(),
            Self::Items(items) => items.len().to_string(),
        }
    }
}

/// Case-insensitive substring match used by the dropdown's search box.
pub fn search_matches(label: &str, query: &str) -> bool {
    label.to_lowercase().contains(&query.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Selection {
        Selection::Items(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn checking_all_collapses_to_sentinel() {
        let mut selection = items(&["swe-bench", "verified"]);
        selection.toggle_all(true);
        assert_eq!(selection, Selection::All);
        assert!(selection.shows_checked("swe-bench"));
        assert!(selection.shows_checked("verified"));
    }

    #[test]
    fn unchecking_all_clears_everything() {
        let mut selection = Selection::All;
        selection.toggle_all(false);
        assert_eq!(selection, Selection::empty());
        assert!(!selection.shows_checked("swe-bench"));
    }

    #[test]
    fn checking_item_displaces_sentinel() {
        let mut selection = Selection::All;
        selection.toggle_item("verified", true);
        assert_eq!(selection, items(&["verified"]));
    }

    #[test]
    fn unchecking_item_never_restores_sentinel() {
        let mut selection = items(&["verified"]);
        selection.toggle_item("verified", false);
        assert_eq!(selection, Selection::empty());
    }

    #[test]
    fn unchecking_under_sentinel_is_a_no_op() {
        let mut selection = Selection::All;
        selection.toggle_item("verified", false);
        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn empty_selection_admits_nothing() {
        let tags = BTreeSet::from(["verified".to_string()]);
        assert!(!Selection::empty().admits_any(&tags));
    }

    #[test]
    fn untagged_row_fails_concrete_selection() {
        assert!(!items(&["verified"]).admits_any(&BTreeSet::new()));
        assert!(Selection::All.admits_any(&BTreeSet::new()));
    }

    #[test]
    fn summary_reflects_state() {
        assert_eq!(Selection::All.summary(), "All");
        assert_eq!(Selection::empty().summary(), "None");
        assert_eq!(items(&["a", "b"]).summary(), "2");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(search_matches("SWE-Bench Verified", "verif"));
        assert!(search_matches("SWE-Bench Verified", "  BENCH "));
        assert!(!search_matches("SWE-Bench Verified", "lite"));
    }
}
