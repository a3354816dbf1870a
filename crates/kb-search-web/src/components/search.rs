//! Search box with a positioned results dropdown

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use kb_search_core::{ComboKey, MenuPlacement, Rect, SearchSession, SessionEvent, StaticIndex};

use super::{Results, SearchBar};
use crate::services::navigate;
use crate::state::SearchContext;

type Session = SearchSession<Arc<StaticIndex>>;

/// Search box for the site header.
///
/// `is_mobile_mode` pins the dropdown to a fixed left margin instead of
/// aligning it with the input.
#[component]
pub fn Search(#[props(default)] is_mobile_mode: bool) -> Element {
    let ctx = use_context::<SearchContext>();
    let config = (ctx.config)();
    let layout = config
        .layout
        .with_compact(is_mobile_mode || config.layout.compact);

    let mut session: Signal<Session> =
        use_signal(|| SearchSession::new(Arc::clone(&*ctx.index.peek())));
    let mut anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut placement: Signal<MenuPlacement> = use_signal(MenuPlacement::default);

    // Pick up the index once it has loaded
    use_effect(move || {
        let index = (ctx.index)();
        session.write().replace_index(index);
    });

    let is_open = use_memo(move || session.read().menu_visible());

    // Measure the input box each time the dropdown opens
    use_effect(move || {
        if !is_open() {
            placement.write().closed();
            return;
        }
        let Some(node) = anchor.peek().as_ref().cloned() else {
            return;
        };
        tracing::debug!("Positioning search results (compact: {})", layout.compact);
        spawn(async move {
            match node.get_client_rect().await {
                Ok(rect) => {
                    let measured = Rect {
                        left: rect.origin.x,
                        top: rect.origin.y,
                        width: rect.size.width,
                        height: rect.size.height,
                    };
                    placement.write().measured(measured, &layout);
                }
                Err(error) => {
                    tracing::warn!("Failed to measure search bar: {:?}", error);
                }
            }
        });
    });

    let handle_event = move |event: Option<SessionEvent>| {
        if let Some(SessionEvent::Navigate { path }) = event {
            navigate(path);
        }
    };

    let on_input = move |evt: FormEvent| {
        session.write().on_input(evt.value());
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let Some(key) = combo_key(&evt.key()) else {
            return;
        };
        if matches!(key, ComboKey::ArrowDown | ComboKey::ArrowUp | ComboKey::Enter) {
            evt.prevent_default();
        }
        let event = session.write().on_key(key);
        handle_event(event);
    };

    let on_blur = move |_: FocusEvent| {
        session.write().on_blur();
    };

    let on_select = move |index: usize| {
        let event = session.write().on_item_click(index);
        handle_event(event);
    };

    let on_hover = move |index: usize| {
        session.write().on_item_hover(index);
    };

    let current = session.read();
    let input_value = current.state().input_value.clone();
    let highlighted_index = current.state().highlighted_index;
    let results = current.results().to_vec();
    drop(current);

    rsx! {
        div {
            class: "searchWrapper",

            SearchBar {
                placeholder: config.placeholder.clone(),
                value: input_value,
                expanded: is_open(),
                oninput: on_input,
                onkeydown: on_keydown,
                onblur: on_blur,
                onmounted: move |evt: MountedEvent| anchor.set(Some(evt.data())),
            }

            if is_open() {
                Results {
                    results,
                    highlighted_index,
                    position: placement.read().position(),
                    on_hover,
                    on_select,
                }
            }
        }
    }
}

/// Map a keyboard key onto the combobox keys it drives.
fn combo_key(key: &Key) -> Option<ComboKey> {
    match key {
        Key::ArrowDown => Some(ComboKey::ArrowDown),
        Key::ArrowUp => Some(ComboKey::ArrowUp),
        Key::Home => Some(ComboKey::Home),
        Key::End => Some(ComboKey::End),
        Key::Enter => Some(ComboKey::Enter),
        Key::Escape => Some(ComboKey::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(combo_key(&Key::ArrowDown), Some(ComboKey::ArrowDown));
        assert_eq!(combo_key(&Key::Escape), Some(ComboKey::Escape));
        assert_eq!(combo_key(&Key::Character("a".to_string())), None);
        assert_eq!(combo_key(&Key::Tab), None);
    }
}
