//! Search session
//!
//! Glue between the query text, the search index, and the combobox state.
//! The view feeds UI events in and acts on the [`SessionEvent`]s that come
//! back; nothing here touches the page.

use crate::combobox::{ComboKey, ComboboxState};
use crate::models::SearchResult;
use crate::search::SearchIndex;

/// Something the view has to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The query was replaced and results recomputed
    QueryChanged { query: String, result_count: usize },
    /// A result was chosen; the view should navigate to `path`
    Navigate { path: String },
}

/// Query, current results, and dropdown state for one search box
#[derive(Debug)]
pub struct SearchSession<I> {
    index: I,
    query: String,
    results: Vec<SearchResult>,
    state: ComboboxState,
    selected_id: Option<String>,
}

impl<I: SearchIndex> SearchSession<I> {
    /// Start an empty, closed session over `index`
    pub fn new(index: I) -> Self {
        Self {
            index,
            query: String::new(),
            results: Vec::new(),
            state: ComboboxState::new(),
            selected_id: None,
        }
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the current query
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Dropdown state
    pub const fn state(&self) -> &ComboboxState {
        &self.state
    }

    /// Whether the dropdown should be rendered
    pub const fn menu_visible(&self) -> bool {
        self.state.is_open
    }

    /// Swap the index and recompute results for the current query.
    pub fn replace_index(&mut self, index: I) {
        self.index = index;
        self.refresh();
    }

    /// The input text changed.
    pub fn on_input(&mut self, text: impl Into<String>) -> SessionEvent {
        let text = text.into();
        self.state.input_changed(text.clone());
        self.query = text;
        self.refresh();
        tracing::debug!(
            "Query changed to {:?}: {} results",
            self.query,
            self.results.len()
        );
        SessionEvent::QueryChanged {
            query: self.query.clone(),
            result_count: self.results.len(),
        }
    }

    /// A key was pressed in the input.
    pub fn on_key(&mut self, key: ComboKey) -> Option<SessionEvent> {
        let selected = self.state.key(key, self.results.len());
        if key == ComboKey::Escape && self.state.input_value.is_empty() && !self.query.is_empty()
        {
            return Some(self.on_cleared());
        }
        selected.and_then(|index| self.select(index))
    }

    /// An item in the dropdown was clicked.
    pub fn on_item_click(&mut self, index: usize) -> Option<SessionEvent> {
        self.select(index)
    }

    /// The pointer moved over an item.
    pub fn on_item_hover(&mut self, index: usize) {
        self.state.hover(index, self.results.len());
    }

    /// Focus left the input.
    pub fn on_blur(&mut self) {
        self.state.blur();
    }

    fn on_cleared(&mut self) -> SessionEvent {
        self.query.clear();
        self.selected_id = None;
        self.refresh();
        SessionEvent::QueryChanged {
            query: String::new(),
            result_count: self.results.len(),
        }
    }

    /// Choosing the already-selected item again closes the menu without
    /// navigating.
    fn select(&mut self, index: usize) -> Option<SessionEvent> {
        let item = self.results.get(index)?;
        self.state.select(SearchResult::display_text(Some(item)));
        if self.selected_id.as_deref() == Some(item.id.as_str()) {
            tracing::debug!("Search result {} already selected", item.id);
            return None;
        }
        self.selected_id = Some(item.id.clone());
        let path = item.path.clone();
        tracing::info!("Selected search result {} -> {}", item.id, path);
        Some(SessionEvent::Navigate { path })
    }

    fn refresh(&mut self) {
        self.results = self.index.search(&self.query);
        self.state.clamp(self.results.len());
    }
}
