mod common;

use assert2::{check, let_assert};
use common::{builtin_engine, titles};
use pulp_search::format::{IDLE_HINT, NO_RESULTS, render_session};
use pulp_search::{InputEvent, SearchEngine, SearchSession, SessionEffect};
use rstest::rstest;

fn open_session(engine: &SearchEngine) -> SearchSession {
    let mut session = SearchSession::new();
    check!(session.handle(engine, InputEvent::Open) == SessionEffect::ShowHint);
    session
}

/// Typing narrows results and Enter follows the highlighted row.
#[rstest]
fn type_navigate_and_select(builtin_engine: SearchEngine) {
    let mut session = open_session(&builtin_engine);
    check!(render_session(&session) == IDLE_HINT);

    let effect = session.handle(&builtin_engine, InputEvent::Query("download".into()));
    check!(effect == SessionEffect::ShowResults);
    check!(session.results() == builtin_engine.search("download").as_slice());

    session.handle(&builtin_engine, InputEvent::Next);
    let_assert!(Some(second) = session.results().get(1).cloned());
    check!(session.selected() == Some(&second));

    let effect = session.handle(&builtin_engine, InputEvent::Submit);
    check!(effect == SessionEffect::Navigate(second.entry.url.clone()));
    check!(!session.is_open());
}

/// Each keystroke replaces the previous result set.
#[rstest]
fn last_query_wins(builtin_engine: SearchEngine) {
    let mut session = open_session(&builtin_engine);
    for partial in ["a", "av", "avi", "avif"] {
        session.handle(&builtin_engine, InputEvent::Query(partial.into()));
    }
    check!(session.query() == "avif");
    check!(titles(session.results()) == titles(&builtin_engine.search("avif")));
}

#[rstest]
fn no_results_screen(builtin_engine: SearchEngine) {
    let mut session = open_session(&builtin_engine);
    session.handle(&builtin_engine, InputEvent::Query("zzzznotfound".into()));
    check!(render_session(&session) == NO_RESULTS);
    check!(session.handle(&builtin_engine, InputEvent::Submit) == SessionEffect::None);
}

/// Selection wraps in both directions and stays in range.
#[rstest]
fn selection_stays_in_range(builtin_engine: SearchEngine) {
    let mut session = open_session(&builtin_engine);
    session.handle(&builtin_engine, InputEvent::Query("format".into()));
    let count = session.results().len();
    check!(count > 1);

    for _ in 0..count * 2 + 1 {
        session.handle(&builtin_engine, InputEvent::Previous);
        check!(session.selected_index() < count);
    }
    for _ in 0..count {
        session.handle(&builtin_engine, InputEvent::Next);
    }
    // 2n+1 steps back then n forward lands one row above the start, wrapped.
    check!(session.selected_index() == count - 1);
}

#[rstest]
fn escape_then_reopen_starts_fresh(builtin_engine: SearchEngine) {
    let mut session = open_session(&builtin_engine);
    session.handle(&builtin_engine, InputEvent::Query("ui".into()));
    session.handle(&builtin_engine, InputEvent::Next);
    check!(session.handle(&builtin_engine, InputEvent::Close) == SessionEffect::Closed);

    check!(session.handle(&builtin_engine, InputEvent::Open) == SessionEffect::ShowHint);
    check!(session.query().is_empty());
    check!(session.results().is_empty());
    check!(session.selected_index() == 0);
}

/// Picking a row by number behaves like highlighting it and pressing Enter.
#[rstest]
fn select_row_directly(builtin_engine: SearchEngine) {
    let mut session = open_session(&builtin_engine);
    session.handle(&builtin_engine, InputEvent::Query("format".into()));
    let count = session.results().len();

    check!(session.handle(&builtin_engine, InputEvent::Select(count)) == SessionEffect::None);
    check!(session.is_open());

    let_assert!(Some(last) = session.results().last().cloned());
    let effect = session.handle(&builtin_engine, InputEvent::Select(count - 1));
    check!(effect == SessionEffect::Navigate(last.entry.url.clone()));
    check!(!session.is_open());
}
