//! Suggestion dropdown under the crop search input.

use dioxus::prelude::*;

use crate::state::*;

/// Candidate rows for the current query. Renders nothing at all while the
/// panel is hidden; an empty result never leaves a placeholder behind.
#[component]
pub fn SuggestionList() -> Element {
    let rows: Vec<String> = CONTROLLER.read().panel().rows().to_vec();
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "search-suggestions",
            for candidate in rows {
                SuggestionRow { candidate }
            }
        }
    }
}

#[component]
fn SuggestionRow(candidate: String) -> Element {
    rsx! {
        div {
            class: "suggestion-item",
            tabindex: "0",
            onclick: {
                let candidate = candidate.clone();
                move |_| accept(&candidate)
            },
            onkeydown: {
                let candidate = candidate.clone();
                move |e: Event<KeyboardData>| match e.key() {
                    Key::Enter => accept(&candidate),
                    Key::Character(text) if text == " " => {
                        e.prevent_default();
                        accept(&candidate);
                    }
                    _ => {}
                }
            },
            "{candidate}"
        }
    }
}

/// Accept a candidate: the controller fills the input and hides the panel,
/// then the returned selection is submitted as a full search.
fn accept(candidate: &str) {
    let selection = CONTROLLER.write().select(candidate);
    submit_search(&selection.value, None);
}
