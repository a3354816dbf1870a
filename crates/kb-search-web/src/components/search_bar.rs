//! Search bar component

use dioxus::prelude::*;

const SEARCH_ICON_PATH: &str = "M23.111 20.058l-4.977-4.977c.965-1.52 1.523-3.322 1.523-5.251 0-5.42-4.409-9.83-9.829-9.83-5.42 0-9.828 4.41-9.828 9.83s4.408 9.83 9.829 9.83c1.834 0 3.552-.505 5.022-1.383l5.021 5.021c2.144 2.141 5.384-1.096 3.239-3.24zm-20.064-10.228c0-3.739 3.043-6.782 6.782-6.782s6.782 3.042 6.782 6.782-3.043 6.782-6.782 6.782-6.782-3.043-6.782-6.782z";

/// Text input with a magnifier icon.
///
/// The wrapper element is reported through `onmounted` so the parent can
/// measure it when positioning the dropdown.
#[component]
pub fn SearchBar(
    placeholder: String,
    value: String,
    expanded: bool,
    oninput: EventHandler<FormEvent>,
    onkeydown: EventHandler<KeyboardEvent>,
    onblur: EventHandler<FocusEvent>,
    onmounted: EventHandler<MountedEvent>,
) -> Element {
    rsx! {
        div {
            class: "inputWrapper",
            onmounted: move |evt| onmounted.call(evt),

            svg {
                class: "searchIcon",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                path { d: SEARCH_ICON_PATH }
            }

            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                autocomplete: "off",
                "role": "combobox",
                "aria-autocomplete": "list",
                "aria-expanded": "{expanded}",
                oninput: move |evt| oninput.call(evt),
                onkeydown: move |evt| onkeydown.call(evt),
                onblur: move |evt| onblur.call(evt),
            }
        }
    }
}
