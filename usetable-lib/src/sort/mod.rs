//! Sorting.
//!
//! - [`SortBy`] / [`SortState`]: the single active sort column and the
//!   click-driven [`toggle`] transition
//! - [`compare_values`]: typed comparison of two cell values
//! - [`sort_rows`]: a sorted copy of the rows for the active sort

mod apply;
mod compare;
mod state;

pub use apply::sort_rows;
pub use compare::SortKey;
pub use compare::SortKind;
pub use compare::compare_keys;
pub use compare::compare_values;
pub use compare::is_date;
pub use compare::normalize_sort_text;
pub use compare::parse_date;
pub use compare::parse_number;
pub use state::Direction;
pub use state::SortBy;
pub use state::SortState;
pub use state::toggle;
