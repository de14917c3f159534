//! Query execution over a catalog.

use super::ranking::score_entry;
use crate::catalog::{Catalog, Entry};
use serde::Serialize;
use std::sync::Arc;

/// Maximum number of results a single search returns.
pub const MAX_RESULTS: usize = 10;

/// A catalog entry together with its score for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: Arc<Entry>,
    pub score: u32,
}

/// Ranks catalog entries against free-text queries.
///
/// Every call rescans the whole catalog; there is no index to keep in sync.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Return up to [`MAX_RESULTS`] matching entries, best first.
    ///
    /// A query that is blank after trimming returns nothing without scanning.
    /// Entries with equal scores keep their catalog order.
    pub fn search(&self, query: &str) -> Vec<ScoredEntry> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();

        let mut results: Vec<ScoredEntry> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                let score = score_entry(&query, entry);
                (score > 0).then(|| ScoredEntry {
                    entry: Arc::clone(entry),
                    score,
                })
            })
            .collect();

        let matched = results.len();
        // `sort_by` is stable, which keeps catalog order among ties.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(MAX_RESULTS);

        tracing::debug!(
            "Search '{}': {} of {} entries matched, returning {}",
            query,
            matched,
            self.catalog.len(),
            results.len()
        );

        results
    }
}
