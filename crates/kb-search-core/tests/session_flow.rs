use std::cell::RefCell;

use kb_search_core::{
    menu_position, ComboKey, LayoutConfig, Rect, SearchIndex, SearchResult, SearchSession,
    SessionEvent,
};
use pretty_assertions::assert_eq;

/// Records every query it is asked for.
#[derive(Default)]
struct RecordingIndex {
    queries: RefCell<Vec<String>>,
}

impl SearchIndex for RecordingIndex {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        self.queries.borrow_mut().push(query.to_string());
        (0..query.len())
            .map(|i| {
                SearchResult::new(
                    format!("{query}-{i}"),
                    format!("{query} page {i}"),
                    "",
                    format!("/docs/{query}/{i}"),
                )
            })
            .collect()
    }
}

#[test]
fn typing_updates_query_and_fetches_results() {
    let mut session = SearchSession::new(RecordingIndex::default());

    session.on_input("g");
    session.on_input("gu");
    session.on_input("gui");

    assert_eq!(session.query(), "gui");
    assert_eq!(session.results().len(), 3);
}

#[test]
fn each_keystroke_triggers_a_new_fetch() {
    let index = RecordingIndex::default();
    let mut session = SearchSession::new(&index);

    for text in ["r", "ru", "rus"] {
        session.on_input(text);
    }

    assert_eq!(
        *index.queries.borrow(),
        vec!["r".to_string(), "ru".to_string(), "rus".to_string()]
    );
}

#[test]
fn clicking_a_result_navigates_to_its_path() {
    let mut session = SearchSession::new(RecordingIndex::default());
    session.on_input("api");

    let event = session.on_item_click(2);

    assert_eq!(
        event,
        Some(SessionEvent::Navigate {
            path: "/docs/api/2".to_string()
        })
    );
    assert_eq!(session.state().input_value, "api page 2");
}

#[test]
fn keyboard_selection_navigates_to_highlighted_path() {
    let mut session = SearchSession::new(RecordingIndex::default());
    session.on_input("ab");
    session.on_key(ComboKey::ArrowUp);

    let event = session.on_key(ComboKey::Enter);

    assert_eq!(
        event,
        Some(SessionEvent::Navigate {
            path: "/docs/ab/1".to_string()
        })
    );
}

#[test]
fn dropdown_visible_only_while_open() {
    let mut session = SearchSession::new(RecordingIndex::default());
    assert!(!session.menu_visible());

    session.on_input("x");
    assert!(session.menu_visible());

    session.on_key(ComboKey::Escape);
    assert!(!session.menu_visible());

    session.on_key(ComboKey::ArrowDown);
    assert!(session.menu_visible());

    session.on_item_click(0);
    assert!(!session.menu_visible());
}

#[test]
fn compact_layout_left_offset_ignores_input_position() {
    let layout = LayoutConfig::default().with_compact(true);
    let lefts: Vec<f64> = [0.0, 120.0, 640.0]
        .into_iter()
        .filter_map(|left| {
            menu_position(
                Some(Rect {
                    left,
                    top: 8.0,
                    width: 200.0,
                    height: 32.0,
                }),
                &layout,
            )
        })
        .map(|position| position.left)
        .collect();

    assert_eq!(lefts, vec![10.0, 10.0, 10.0]);
}
