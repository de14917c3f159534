//! Plain-text rendering of results, sessions and entries.

use crate::catalog::Entry;
use crate::search::ScoredEntry;
use crate::session::SearchSession;
use std::fmt::Write as _;

/// Shown while the session is open without a query.
pub const IDLE_HINT: &str = "Start typing to search CLI commands, UI options, and documentation...\n\
                             [↑][↓] Navigate   [Enter] Select   [Esc] Close\n";

/// Shown when a query matches nothing.
pub const NO_RESULTS: &str = "No results found. Try different keywords.\n";

/// Render a ranked result list. `selected` marks one row with `>`.
///
/// Relevance is relative to the first (best) result.
pub fn render_results(results: &[ScoredEntry], selected: Option<usize>) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let max_score = results.first().map_or(1, |r| r.score.max(1));
    let mut output = String::new();

    for (idx, result) in results.iter().enumerate() {
        let marker = if selected == Some(idx) { '>' } else { ' ' };
        let relevance = u64::from(result.score) * 100 / u64::from(max_score);
        let entry = &result.entry;

        let _ = writeln!(
            output,
            "{}{:>2}. {} {} [{}] - relevance: {}%",
            marker,
            idx + 1,
            entry.kind.icon(),
            entry.title,
            entry.kind.label(),
            relevance
        );
        let _ = writeln!(output, "     {}", entry.description);
        if let Some(command) = &entry.command {
            let _ = writeln!(output, "     $ {}", command);
        }
        let _ = writeln!(output, "     -> {}", entry.url);
    }

    output
}

/// Render a one-shot query: the idle hint when it is blank, results otherwise.
pub fn render_query(query: &str, results: &[ScoredEntry]) -> String {
    if query.trim().is_empty() {
        IDLE_HINT.to_string()
    } else {
        render_results(results, None)
    }
}

/// Render what an open session currently shows.
pub fn render_session(session: &SearchSession) -> String {
    if session.query().trim().is_empty() {
        IDLE_HINT.to_string()
    } else {
        render_results(session.results(), Some(session.selected_index()))
    }
}

/// Render every field of one entry.
pub fn render_entry(entry: &Entry) -> String {
    let mut output = format!("{} {}\n\n", entry.kind.icon(), entry.title);
    let _ = writeln!(output, "Type: {}", entry.kind.label());
    let _ = writeln!(output, "Description: {}", entry.description);
    if let Some(command) = &entry.command {
        let _ = writeln!(output, "Command: {}", command);
    }
    let _ = writeln!(output, "URL: {}", entry.url);
    if !entry.keywords.is_empty() {
        let _ = writeln!(output, "Keywords: {}", entry.keywords.join(", "));
    }
    output
}

/// One line per entry: icon, title, kind and URL.
pub fn render_listing<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let mut output = String::new();
    for entry in entries {
        let _ = writeln!(
            output,
            "{} {} [{}] -> {}",
            entry.kind.icon(),
            entry.title,
            entry.kind.label(),
            entry.url
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EntryKind};
    use crate::search::SearchEngine;
    use crate::session::InputEvent;
    use assert2::check;
    use std::sync::Arc;

    fn scored(title: &str, score: u32) -> ScoredEntry {
        ScoredEntry {
            entry: Arc::new(
                Entry::new(EntryKind::Cli, title, "desc", "cli.html").with_command("pulp x"),
            ),
            score,
        }
    }

    #[test]
    fn test_empty_results_message() {
        check!(render_results(&[], None) == NO_RESULTS);
    }

    #[test]
    fn test_relevance_relative_to_best() {
        let output = render_results(&[scored("first", 80), scored("second", 20)], None);
        check!(output.contains("first [CLI] - relevance: 100%"));
        check!(output.contains("second [CLI] - relevance: 25%"));
        check!(output.contains("$ pulp x"));
    }

    #[test]
    fn test_selected_row_marked() {
        let output = render_results(&[scored("first", 2), scored("second", 1)], Some(1));
        let lines: Vec<&str> = output.lines().filter(|l| l.contains("relevance")).collect();
        check!(lines[0].starts_with(' '));
        check!(lines[1].starts_with('>'));
    }

    #[test]
    fn test_blank_query_renders_hint() {
        check!(render_query("   ", &[]) == IDLE_HINT);
        check!(render_query("zzzz", &[]) == NO_RESULTS);
        check!(render_query("first", &[scored("first", 5)]).starts_with("  1."));
    }

    #[test]
    fn test_session_hint_when_idle() {
        let engine = SearchEngine::new(Catalog::builtin().unwrap());
        let mut session = SearchSession::new();
        session.handle(&engine, InputEvent::Open);
        check!(render_session(&session) == IDLE_HINT);
        session.handle(&engine, InputEvent::Query("webp".into()));
        check!(render_session(&session).starts_with(">"));
    }

    #[test]
    fn test_render_entry_lists_keywords() {
        let entry = Entry::new(EntryKind::Format, "AVIF Format", "Best compression", "cli.html")
            .with_keywords(["avif", "small"]);
        let output = render_entry(&entry);
        check!(output.contains("Type: Format"));
        check!(output.contains("Keywords: avif, small"));
        check!(!output.contains("Command:"));
    }
}
