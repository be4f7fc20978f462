use crate::row::Row;
use crate::select::Selection;

/// Category (row type) filter: the "all" button or one concrete category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret a filter button's `data-filter` value.
    pub fn from_value(raw: &str) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Per-board filter state. Lives for the page session only.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub tags: Selection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            tags: Selection::All,
        }
    }
}

impl FilterState {
    /// The visibility predicate: category check AND tag check.
    pub fn admits(&self, row: &Row) -> bool {
        self.category.matches(&row.category) && self.tags.admits_any(&row.tags)
    }
}

/// Rewrite every row's `visible` flag from the filter state.
/// Never reorders; returns the visible count so the caller can surface the
/// no-results state.
pub fn apply(rows: &mut [Row], state: &FilterState) -> usize {
    let mut visible = 0;
    for row in rows.iter_mut() {
        row.visible = state.admits(row);
        if row.visible {
            visible += 1;
        }
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    fn row(category: &str, tags: &[&str]) -> Row {
        Row::new(
            category,
            tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            HashMap::new(),
            None,
        )
    }

    #[test]
    fn category_all_admits_every_type() {
        let state = FilterState::default();
        assert!(state.admits(&row("proprietary", &[])));
        assert!(state.admits(&row("open-source", &[])));
    }

    #[test]
    fn concrete_category_excludes_others() {
        let state = FilterState {
            category: CategoryFilter::Only("open-source".to_string()),
            tags: Selection::All,
        };
        assert!(state.admits(&row("open-source", &[])));
        assert!(!state.admits(&row("proprietary", &[])));
    }

    #[test]
    fn tag_selection_requires_nonempty_intersection() {
        let state = FilterState {
            category: CategoryFilter::All,
            tags: Selection::Items(BTreeSet::from(["verified".to_string()])),
        };
        assert!(state.admits(&row("proprietary", &["verified", "lite"])));
        assert!(!state.admits(&row("proprietary", &["lite"])));
        assert!(!state.admits(&row("proprietary", &[])));
    }

    #[test]
    fn apply_rewrites_flags_and_counts() {
        let mut rows = vec![row("a", &[]), row("a", &[]), row("b", &[])];
        let state = FilterState {
            category: CategoryFilter::Only("a".to_string()),
            tags: Selection::All,
        };
        assert_eq!(apply(&mut rows, &state), 2);
        assert_eq!(
            rows.iter().map(|r| r.visible).collect::<Vec<_>>(),
            vec![true, true, false]
        );
    }

    #[test]
    fn apply_is_deterministic_for_same_inputs() {
        let mut rows = vec![row("a", &["x"]), row("b", &["y"])];
        let state = FilterState {
            category: CategoryFilter::All,
            tags: Selection::Items(BTreeSet::from(["x".to_string()])),
        };
        let first = apply(&mut rows, &state);
        let flags: Vec<_> = rows.iter().map(|r| r.visible).collect();
        let second = apply(&mut rows, &state);
        assert_eq!(first, second);
        assert_eq!(flags, rows.iter().map(|r| r.visible).collect::<Vec<_>>());
    }

    #[test]
    fn empty_tag_selection_hides_every_row() {
        let mut rows = vec![row("a", &["x"]), row("b", &["y"])];
        let state = FilterState {
            category: CategoryFilter::All,
            tags: Selection::empty(),
        };
        assert_eq!(apply(&mut rows, &state), 0);
        assert!(rows.iter().all(|r| !r.visible));
    }
}
