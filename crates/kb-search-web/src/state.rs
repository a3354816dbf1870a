//! Application state management
//!
//! Shared state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use kb_search_core::{SearchConfig, StaticIndex};

/// State shared by every search box on the page
#[derive(Clone, Copy)]
pub struct SearchContext {
    /// Build-provisioned widget configuration
    pub config: Signal<SearchConfig>,
    /// Loaded search document; empty until the fetch completes
    pub index: Signal<Arc<StaticIndex>>,
}
