//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use kb_search_core::{SearchConfig, StaticIndex};

use crate::components::Search;
use crate::search_config::load_search_config;
use crate::services::load_index;
use crate::state::SearchContext;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_signal(load_search_config);
    let mut index = use_signal(|| Arc::new(StaticIndex::default()));

    // Load the search document once
    use_future(move || async move {
        let current = SearchConfig::clone(&config.peek());
        match load_index(&current).await {
            Ok(loaded) => index.set(Arc::new(loaded)),
            Err(e) => {
                tracing::error!("Failed to load search index: {}", e);
            }
        }
    });

    use_context_provider(|| SearchContext { config, index });

    let compact = config.read().layout.compact;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/search.css") }

        header {
            class: "kb-header",
            Search { is_mobile_mode: compact }
        }
    }
}
