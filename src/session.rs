//! Interactive search state driven by discrete input events.
//!
//! A [`SearchSession`] owns the query, the current results and the highlighted
//! row. Front-ends translate whatever input they receive (keys, stdin lines)
//! into [`InputEvent`]s and act on the returned [`SessionEffect`].

use crate::search::{ScoredEntry, SearchEngine};

/// Input a front-end feeds into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Open the search surface with a fresh state.
    Open,
    /// Close the search surface.
    Close,
    /// Open when closed, close when open.
    Toggle,
    /// The query text changed.
    Query(String),
    /// Move the highlight down, wrapping to the first row.
    Next,
    /// Move the highlight up, wrapping to the last row.
    Previous,
    /// Follow the highlighted result.
    Submit,
    /// Follow the result at this zero-based row directly.
    Select(usize),
}

/// What the front-end should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Nothing changed.
    None,
    /// Show the idle hint (open with no query).
    ShowHint,
    /// Redraw the result list, which may be empty.
    ShowResults,
    /// Go to this URL. The session has already closed.
    Navigate(String),
    /// The session closed.
    Closed,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    open: bool,
    query: String,
    results: Vec<ScoredEntry>,
    selected: usize,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ScoredEntry] {
        &self.results
    }

    /// Index of the highlighted row. Always in range while results exist.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&ScoredEntry> {
        self.results.get(self.selected)
    }

    /// Apply one input event.
    pub fn handle(&mut self, engine: &SearchEngine, event: InputEvent) -> SessionEffect {
        match event {
            InputEvent::Open => self.open(),
            InputEvent::Toggle if self.open => self.close(),
            InputEvent::Toggle => self.open(),
            _ if !self.open => SessionEffect::None,
            InputEvent::Close => self.close(),
            InputEvent::Query(query) => {
                self.results = engine.search(&query);
                self.query = query;
                self.selected = 0;
                if self.query.trim().is_empty() {
                    SessionEffect::ShowHint
                } else {
                    SessionEffect::ShowResults
                }
            }
            InputEvent::Next => self.step(|selected, len| (selected + 1) % len),
            InputEvent::Previous => self.step(|selected, len| (selected + len - 1) % len),
            InputEvent::Submit => self.follow(self.selected),
            InputEvent::Select(index) => self.follow(index),
        }
    }

    fn follow(&mut self, index: usize) -> SessionEffect {
        let Some(hit) = self.results.get(index) else {
            return SessionEffect::None;
        };
        let url = hit.entry.url.clone();
        self.selected = index;
        self.close();
        SessionEffect::Navigate(url)
    }

    fn open(&mut self) -> SessionEffect {
        self.open = true;
        self.query.clear();
        self.results.clear();
        self.selected = 0;
        SessionEffect::ShowHint
    }

    fn close(&mut self) -> SessionEffect {
        self.open = false;
        SessionEffect::Closed
    }

    fn step(&mut self, next: impl FnOnce(usize, usize) -> usize) -> SessionEffect {
        if self.results.is_empty() {
            return SessionEffect::None;
        }
        self.selected = next(self.selected, self.results.len());
        SessionEffect::ShowResults
    }
}
