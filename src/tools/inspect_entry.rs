//! Single-entry lookup with "did you mean" suggestions.

use crate::format::render_entry;
use crate::search::SearchEngine;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Minimum Jaro-Winkler similarity for a title to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InspectEntryRequest {
    /// Exact entry title (case-insensitive), e.g. "WebP Format" or "--width, -w"
    pub title: String,
}

pub fn handle_inspect_entry(engine: &SearchEngine, request: &InspectEntryRequest) -> String {
    let catalog = engine.catalog();
    if let Some(entry) = catalog.find_by_title(&request.title) {
        return render_entry(entry);
    }

    let suggestions: Vec<_> = catalog
        .suggest_titles(&request.title)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .filter(|s| s.score > SUGGESTION_THRESHOLD)
        .collect();

    if suggestions.is_empty() {
        return format!(
            "Entry '{}' not found. Use the search tool to find entries by keyword.\n",
            request.title
        );
    }

    let mut result = format!(
        "Entry '{}' not found. Did you mean one of these?\n\n",
        request.title
    );
    for suggestion in suggestions {
        let _ = writeln!(
            result,
            "• `{}` ({})",
            suggestion.entry.title,
            suggestion.entry.kind.label()
        );
    }
    result
}
