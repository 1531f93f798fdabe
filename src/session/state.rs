//! Search session state machine
//!
//! ```text
//!            open / hotkey              set_query (non-blank)
//!  Closed ─────────────────▶ OpenEmpty ◀──────────────────▶ OpenResults
//!    ▲                          │       set_query (blank)        │
//!    └──── close / dismiss / commit ◀────────────────────────────┘
//! ```
//!
//! Every query mutation recomputes the results from scratch against the
//! catalog passed in, and resets the selection.

use super::{Hotkey, Key, KeyEvent, SelectionCursor};
use crate::loader::Catalog;
use crate::search::{SearchResult, Searcher};

/// Lifecycle state of the search overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// Open with a blank query; no results shown
    OpenEmpty,
    /// Open with a non-blank query; results computed
    OpenResults,
}

/// Receives the result the user committed to
pub trait Navigator {
    fn navigate(&mut self, result: &SearchResult);
}

impl<F> Navigator for F
where
    F: FnMut(&SearchResult),
{
    fn navigate(&mut self, result: &SearchResult) {
        self(result)
    }
}

/// Query, ranked results and selection of one search overlay
#[derive(Debug, Clone)]
pub struct SearchSession {
    state: SessionState,
    query: String,
    results: Vec<SearchResult>,
    cursor: SelectionCursor,
    searcher: Searcher,
    hotkey: Hotkey,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(Searcher::default(), Hotkey::default())
    }
}

impl SearchSession {
    /// Create a closed session
    pub fn new(searcher: Searcher, hotkey: Hotkey) -> Self {
        Self {
            state: SessionState::Closed,
            query: String::new(),
            results: Vec::new(),
            cursor: SelectionCursor::default(),
            searcher,
            hotkey,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// The highlighted result, if any
    pub fn selected(&self) -> Option<&SearchResult> {
        self.cursor.index().and_then(|i| self.results.get(i))
    }

    /// Open the overlay from a fully reset state; no-op when already open
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.reset();
        self.state = SessionState::OpenEmpty;
        tracing::debug!("search session opened");
    }

    /// Close the overlay and clear query and results
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.reset();
        self.state = SessionState::Closed;
        tracing::debug!("search session closed");
    }

    /// Activation outside the search surface
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Replace the query and recompute results; ignored while closed
    pub fn set_query(&mut self, query: &str, catalog: &Catalog) {
        if !self.is_open() {
            return;
        }

        self.query = query.to_string();
        self.results = self.searcher.search(query, catalog);
        self.cursor.reset();
        self.state = if query.trim().is_empty() {
            SessionState::OpenEmpty
        } else {
            SessionState::OpenResults
        };
    }

    /// Move the selection down, wrapping to the first result
    pub fn next(&mut self) {
        if self.is_open() {
            self.cursor.next(self.results.len());
        }
    }

    /// Move the selection up, wrapping to the last result
    pub fn previous(&mut self) {
        if self.is_open() {
            self.cursor.previous(self.results.len());
        }
    }

    /// Pointer moved over row `index`
    pub fn hover(&mut self, index: usize) {
        if self.is_open() {
            self.cursor.select(index, self.results.len());
        }
    }

    /// Hand the selected result to `navigator` and close
    ///
    /// Returns the committed result, or `None` when nothing is selected.
    pub fn commit<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> Option<SearchResult> {
        let index = self.cursor.index()?;
        self.commit_index(index, navigator)
    }

    /// Commit row `index` directly (a click on that row)
    pub fn commit_index<N: Navigator + ?Sized>(
        &mut self,
        index: usize,
        navigator: &mut N,
    ) -> Option<SearchResult> {
        if !self.is_open() {
            return None;
        }
        let result = self.results.get(index)?.clone();

        tracing::debug!(title = %result.title, section = %result.section, "search result committed");
        navigator.navigate(&result);
        self.close();
        Some(result)
    }

    /// Dispatch a key press; returns whether the session consumed it
    ///
    /// While closed only the open hotkey is handled.
    pub fn handle_key<N: Navigator + ?Sized>(&mut self, event: &KeyEvent, navigator: &mut N) -> bool {
        if !self.is_open() {
            if self.hotkey.matches(event) {
                self.open();
                return true;
            }
            return false;
        }

        match event.key {
            Key::Escape => {
                self.close();
                true
            }
            Key::ArrowDown => {
                self.next();
                true
            }
            Key::ArrowUp => {
                self.previous();
                true
            }
            Key::Enter => {
                self.commit(navigator);
                true
            }
            _ => false,
        }
    }

    /// Informational line shown under the input
    pub fn status_line(&self) -> String {
        match self.state {
            SessionState::Closed => String::new(),
            SessionState::OpenEmpty => "Start typing to search across all content...".to_string(),
            SessionState::OpenResults if self.results.is_empty() => {
                format!("No results found for \"{}\"", self.query)
            }
            SessionState::OpenResults => format!("{} results", self.results.len()),
        }
    }

    fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.cursor.reset();
    }
}
