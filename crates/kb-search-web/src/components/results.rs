//! Results dropdown component

use dioxus::prelude::*;

use kb_search_core::{MenuPosition, SearchResult};

const HIGHLIGHT_BG: &str = "var(--kb-search-highlight-bg)";
const ITEM_BG: &str = "var(--kb-note-bg)";

/// Floating list of results, fixed to the viewport at `position`.
#[component]
pub fn Results(
    results: Vec<SearchResult>,
    highlighted_index: Option<usize>,
    position: Option<MenuPosition>,
    on_hover: EventHandler<usize>,
    on_select: EventHandler<usize>,
) -> Element {
    let offsets = position.map(MenuPosition::to_style).unwrap_or_default();

    rsx! {
        ul {
            class: "results z-20",
            "role": "listbox",
            style: "position: fixed; {offsets}",

            for (index, result) in results.into_iter().enumerate() {
                {
                    let is_highlighted = highlighted_index == Some(index);
                    let background = if is_highlighted { HIGHLIGHT_BG } else { ITEM_BG };

                    rsx! {
                        li {
                            key: "{result.id}",
                            "role": "option",
                            "aria-selected": "{is_highlighted}",
                            style: "background: {background};",
                            onmousemove: move |_| on_hover.call(index),
                            // Keep focus in the input so blur doesn't close the menu first
                            onmousedown: move |evt: MouseEvent| evt.prevent_default(),
                            onclick: move |_| on_select.call(index),

                            div { class: "title", "{result.title}" }
                            div { class: "excerpt", "{result.excerpt}" }
                        }
                    }
                }
            }
        }
    }
}
