//! Fuzzy search over the documentation catalog.
//!
//! Matching is split in three layers: [`fuzzy_score`] scores one field,
//! [`score_entry`] combines the fields of one entry, and [`SearchEngine`]
//! ranks the catalog and keeps the top results.

pub mod engine;
pub mod fuzzy;
pub mod ranking;

pub use engine::{MAX_RESULTS, ScoredEntry, SearchEngine};
pub use fuzzy::fuzzy_score;
pub use ranking::score_entry;
