//! Crop search: the input field plus its suggestion dropdown, sharing one
//! dismissal registration and one controller.

mod search_input;
mod suggestion_panel;

use dioxus::prelude::*;

use search_input::SearchBox;
use suggestion_panel::SuggestionList;

use crate::state::*;

/// The live search widget at the top of the page.
///
/// Everything inside the wrapper counts as "on the widget" for outside-click
/// purposes: the click is noted here on its way up, so the page-level
/// handler spares this widget and dismisses the rest. The widget registers
/// with the dispatcher on mount and disposes itself on unmount, which also
/// turns any still-sleeping debounce timer into a no-op.
#[component]
pub fn SearchSection() -> Element {
    let widget = use_hook(|| {
        let id = DISPATCHER.write().register();
        *SEARCH_WIDGET.write() = Some(id);
        id
    });

    use_drop(move || {
        DISPATCHER.write().dispose(widget);
        *SEARCH_WIDGET.write() = None;
        CONTROLLER.write().dispose();
    });

    rsx! {
        section {
            class: "search-section",
            form {
                class: "search-form",
                onsubmit: move |e: Event<FormData>| {
                    e.prevent_default();
                    let value = CONTROLLER.read().input_value().trim().to_string();
                    if value.is_empty() {
                        return;
                    }
                    CONTROLLER.write().dismiss();
                    submit_search(&value, None);
                },
                div {
                    class: "search-field",
                    onclick: move |_| {
                        if let Some(id) = *SEARCH_WIDGET.read() {
                            DISPATCHER.write().note_hit(id);
                        }
                    },
                    SearchBox {}
                    SuggestionList {}
                }
            }
        }
    }
}
