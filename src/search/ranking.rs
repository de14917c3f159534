//! Per-entry relevance: weighted sum of field matches.
//!
//! Title matches count most, then description and command. Keywords add a
//! flat bonus for substring hits on top of their own fuzzy match.

use super::fuzzy::fuzzy_score;
use crate::catalog::Entry;

pub const TITLE_WEIGHT: u32 = 3;
pub const DESCRIPTION_WEIGHT: u32 = 2;
pub const COMMAND_WEIGHT: u32 = 2;
/// Added per keyword when either the keyword or the query contains the other.
pub const KEYWORD_SUBSTRING_BONUS: u32 = 5;

/// Score one entry against a query that is already trimmed and lower-cased.
///
/// The total saturates at `u32::MAX`.
pub fn score_entry(query: &str, entry: &Entry) -> u32 {
    let weighted = |weight: u32, text: &str| weight.saturating_mul(fuzzy_score(query, text));

    let mut score = weighted(TITLE_WEIGHT, &entry.title)
        .saturating_add(weighted(DESCRIPTION_WEIGHT, &entry.description));

    if let Some(command) = &entry.command {
        score = score.saturating_add(weighted(COMMAND_WEIGHT, command));
    }

    for keyword in &entry.keywords {
        if keyword.contains(query) || query.contains(keyword.as_str()) {
            score = score.saturating_add(KEYWORD_SUBSTRING_BONUS);
        }
        score = score.saturating_add(fuzzy_score(query, keyword));
    }

    score
}
