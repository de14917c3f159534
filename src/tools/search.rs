//! Fuzzy search handler for the documentation catalog.

use crate::format::render_results;
use crate::search::{MAX_RESULTS, SearchEngine};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query, matched fuzzily against titles, descriptions, commands and keywords
    pub query: String,
    /// Maximum number of results to return (default and upper bound: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute a search and format the ranked results.
///
/// A query with no matches is not an error; it yields a message with tips.
pub fn handle_search(engine: &SearchEngine, request: &SearchRequest) -> Result<String, String> {
    if request.query.trim().is_empty() {
        return Err("Query must not be empty".to_string());
    }

    let limit = request.limit.unwrap_or(MAX_RESULTS).clamp(1, MAX_RESULTS);
    let mut results = engine.search(&request.query);
    results.truncate(limit);

    if results.is_empty() {
        let mut msg = format!("No results found for '{}'.\n\n", request.query.trim());
        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search for flags like '--width' or '--format'\n");
        msg.push_str("• Try formats like 'webp' or 'avif'\n");
        return Ok(msg);
    }

    Ok(format!(
        "Search results for '{}':\n\n{}",
        request.query.trim(),
        render_results(&results, None)
    ))
}
