pub mod board;
pub mod descriptor;
pub mod filter;
pub mod footnote;
pub mod rank;
pub mod row;
pub mod select;
pub mod sort;

pub use board::{Board, RefreshOutcome};
pub use descriptor::{BoardDescriptor, parse_descriptors};
pub use filter::{CategoryFilter, FilterState};
pub use footnote::FootnoteEntry;
pub use row::Row;
pub use select::Selection;
pub use sort::{Direction, SortState};
