//! Debounced search input.

use crate::state::AppState;
use dioxus::prelude::*;

/// Text input that filters the table once typing pauses.
#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let input = (state.query_input)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            input {
                r#type: "search",
                placeholder: "Search by place, id or magnitude",
                value: "{input}",
                style: "flex: 1; max-width: 360px; padding: 4px 8px;",
                oninput: move |evt: Event<FormData>| state.type_query(evt.value()),
            }
            if !input.is_empty() {
                button {
                    style: "padding: 4px 12px; cursor: pointer;",
                    onclick: move |_| state.clear_query(),
                    "Clear"
                }
            }
        }
    }
}
