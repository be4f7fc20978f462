use crate::descriptor::BoardDescriptor;
use crate::filter::{self, CategoryFilter, FilterState};
use crate::footnote::{self, FootnoteEntry};
use crate::rank;
use crate::row::Row;
use crate::select::Selection;
use crate::sort::{self, Direction, SortState};

/// Everything the renderer needs after one pipeline pass. Derived, never
/// stored: `ranks` and `markers` are indexed by row id, `order` lists row ids
/// in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub order: Vec<usize>,
    pub visible: Vec<bool>,
    pub ranks: Vec<Option<usize>>,
    pub markers: Vec<Option<String>>,
    pub footnotes: Vec<FootnoteEntry>,
    pub no_results: bool,
}

/// One leaderboard: its rows, filter state, and sort state. The exclusive
/// owner of all three: engines are only ever invoked through its methods, so
/// visibility, order, ranks, and footnotes can never be observed out of sync.
#[derive(Debug, Clone)]
pub struct Board {
    pub name: String,
    rows: Vec<Row>,
    order: Vec<usize>,
    pub filter: FilterState,
    pub sort: SortState,
    text_columns: Vec<String>,
    default_sort: String,
}

impl Board {
    pub fn new(descriptor: &BoardDescriptor, rows: Vec<Row>) -> Self {
        let order = (0..rows.len()).collect();
        Self {
            name: descriptor.name.clone(),
            rows,
            order,
            filter: FilterState::default(),
            sort: SortState::default(),
            text_columns: descriptor.text_columns.clone(),
            default_sort: descriptor.default_sort.clone(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The full pipeline, in fixed order: visibility, then display order,
    /// then ranks, then footnotes.
    /// Every mutating entry point funnels through here, and the
    /// pass is synchronous, so callers never observe intermediate state.
    /// Idempotent: a second run with unchanged state yields an equal outcome.
    pub fn refresh(&mut self) -> RefreshOutcome {
        let visible_count = filter::apply(&mut self.rows, &self.filter);
        sort::apply(&self.rows, &mut self.order, &self.sort);
        let ranks = rank::assign(&self.rows, &self.order);
        let (footnotes, markers) = footnote::reconcile(&self.rows, &self.order);
        RefreshOutcome {
            order: self.order.clone(),
            visible: self.rows.iter().map(|row| row.visible).collect(),
            ranks,
            markers,
            footnotes,
            no_results: visible_count == 0,
        }
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) -> RefreshOutcome {
        self.filter.category = category;
        self.refresh()
    }

    pub fn set_tag_selection(&mut self, tags: Selection) -> RefreshOutcome {
        self.filter.tags = tags;
        self.refresh()
    }

    /// Header click: flip the active column, or start a new one at its
    /// type-dependent default direction.
    pub fn sort_by(&mut self, column: &str) -> RefreshOutcome {
        self.sort = self.sort.next_for(column, &self.text_columns);
        self.refresh()
    }

    /// Tab activation: sort state resets to the board's default column,
    /// descending. Filter state is deliberately left alone.
    pub fn reset_sort(&mut self) -> RefreshOutcome {
        self.sort = SortState {
            column: Some(self.default_sort.clone()),
            direction: Direction::Desc,
        };
        self.refresh()
    }
}
