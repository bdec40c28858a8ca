//! Data pipeline turning host records into the menu's ordered, grouped and
//! searchable entry list.
//!
//! Every stage is a pure function of its input and runs synchronously inside
//! the event that triggers it:
//!
//! ```text
//! Records + ViewState → project/order → MenuEntry[] → group_by_month
//!                                           │
//!                                           └→ SearchIndex → query → hits + highlights
//! ```
//!
//! # Modules
//!
//! - [`normalize`]: Diacritic stripping for comparison and indexing
//! - [`ordering`]: Projection, stable rank sort, and reorder
//! - [`grouping`]: Month/year bucketing
//! - [`search`]: Token index with highlight ranges

pub mod grouping;
pub mod normalize;
pub mod ordering;
pub mod search;

pub use grouping::{group_by_month, month_label, MonthGroup};
pub use normalize::normalize;
pub use ordering::{order_entries, project, reorder, sort_by_order};
pub use search::{HighlightRange, SearchHit, SearchIndex, SearchOutcome, MIN_MATCH_CHAR_LENGTH};
