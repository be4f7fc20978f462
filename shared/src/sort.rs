use std::cmp::Ordering;

use crate::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Class added to the active header cell.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Per-board sort state. `column: None` means the load order is untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: Direction,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            direction: Direction::Desc,
        }
    }
}

impl SortState {
    /// State after a header click: the active column flips direction, a new
    /// column starts ascending when designated text/date, descending
    /// otherwise.
    pub fn next_for(&self, column: &str, text_columns: &[String]) -> Self {
        let direction = if self.column.as_deref() == Some(column) {
            self.direction.flipped()
        } else if text_columns.iter().any(|c| c == column) {
            Direction::Asc
        } else {
            Direction::Desc
        };
        Self {
            column: Some(column.to_string()),
            direction,
        }
    }
}

/// Two-path comparison: numeric when both sides coerce, lexicographic on the
/// raw strings otherwise. The text/date designation of a column does not
/// bypass coercion; it only picks the default direction.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Reorder the display permutation in place. Stable: equal keys keep their
/// current relative order. A `None` column leaves the permutation untouched.
pub fn apply(rows: &[Row], order: &mut [usize], state: &SortState) {
    let Some(column) = state.column.as_deref() else {
        return;
    };
    order.sort_by(|&a, &b| {
        let ord = compare_values(rows[a].value(column), rows[b].value(column));
        match state.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    fn row(column: &str, value: &str) -> Row {
        Row::new(
            "proprietary",
            BTreeSet::new(),
            HashMap::from([(column.to_string(), value.to_string())]),
            None,
        )
    }

    fn text_columns() -> Vec<String> {
        vec!["model".to_string(), "org".to_string(), "date".to_string()]
    }

    #[test]
    fn new_numeric_column_defaults_descending() {
        let state = SortState::default().next_for("resolved", &text_columns());
        assert_eq!(state.column.as_deref(), Some("resolved"));
        assert_eq!(state.direction, Direction::Desc);
    }

    #[test]
    fn new_text_column_defaults_ascending() {
        let state = SortState::default().next_for("model", &text_columns());
        assert_eq!(state.direction, Direction::Asc);
    }

    #[test]
    fn repeated_clicks_alternate_direction() {
        let first = SortState::default().next_for("resolved", &text_columns());
        let second = first.next_for("resolved", &text_columns());
        let third = second.next_for("resolved", &text_columns());
        assert_eq!(first.direction, Direction::Desc);
        assert_eq!(second.direction, Direction::Asc);
        assert_eq!(third.direction, Direction::Desc);
    }

    #[test]
    fn switching_column_resets_to_its_default() {
        let on_score = SortState::default().next_for("resolved", &text_columns());
        let on_model = on_score.next_for("model", &text_columns());
        assert_eq!(on_model.direction, Direction::Asc);
    }

    #[test]
    fn mixed_numeric_coercible_values_compare_numerically() {
        let rows = vec![row("score", "10"), row("score", "5"), row("score", "20")];
        let mut order = vec![0, 1, 2];
        let state = SortState {
            column: Some("score".to_string()),
            direction: Direction::Desc,
        };
        apply(&rows, &mut order, &state);
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn non_numeric_values_compare_as_strings() {
        let rows = vec![row("model", "gpt"), row("model", "claude"), row("model", "gemini")];
        let mut order = vec![0, 1, 2];
        let state = SortState {
            column: Some("model".to_string()),
            direction: Direction::Asc,
        };
        apply(&rows, &mut order, &state);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let rows = vec![
            row("score", "50"),
            row("score", "75"),
            row("score", "50"),
            row("score", "75"),
        ];
        let mut order = vec![0, 1, 2, 3];
        let state = SortState {
            column: Some("score".to_string()),
            direction: Direction::Desc,
        };
        apply(&rows, &mut order, &state);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn unsorted_state_keeps_load_order() {
        let rows = vec![row("score", "1"), row("score", "9")];
        let mut order = vec![0, 1];
        apply(&rows, &mut order, &SortState::default());
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn missing_value_takes_string_path() {
        // "" does not coerce, so both sides compare lexicographically.
        assert_eq!(compare_values("", "10"), Ordering::Less);
        assert_eq!(compare_values("10", "9"), Ordering::Greater);
    }
}
