//! Crop search input with debounced suggestion lookup.

use dioxus::prelude::*;

use harvest_api::SearchKind;
use harvest_core::config::SearchTuning;
use harvest_core::debounce::Debouncer;
use harvest_core::suggest::lookup_or_empty;

use crate::state::*;

#[component]
pub fn SearchBox() -> Element {
    // Separate debouncer for the server-side quick search, so the two
    // pipelines coalesce independently.
    let quick = use_signal(|| {
        let wait = CORE
            .read()
            .as_ref()
            .map(|state| state.config.search.wait())
            .unwrap_or_else(|| SearchTuning::default().wait());
        Debouncer::new(wait)
    });

    let input_value = CONTROLLER.read().input_value().to_string();

    rsx! {
        input {
            class: "search-input",
            r#type: "text",
            name: "search",
            placeholder: "Search crops...",
            autocomplete: "off",
            value: "{input_value}",
            autofocus: true,
            oninput: move |e: Event<FormData>| {
                let value = e.value();

                // Mirror the keystroke into the controller; a ticket comes
                // back only when a debounce window actually starts.
                if let Some(ticket) = CONTROLLER.write().input_changed(&value) {
                    spawn(async move {
                        ticket.elapse().await;
                        let Some(query) = CONTROLLER.write().fire_begin(ticket) else {
                            return;
                        };
                        let source = match CORE.read().as_ref() {
                            Some(state) => state.source.clone(),
                            None => return,
                        };
                        let candidates = lookup_or_empty(&source, &query).await;
                        CONTROLLER.write().fire_complete(ticket, candidates);
                    });
                }

                schedule_quick_search(quick);
            },
        }
    }
}

/// Debounced server round-trip behind the dropdown pipeline. The query is
/// read at fire time and skipped when too short; results are logged rather
/// than rendered, the dropdown stays on the local vocabulary.
fn schedule_quick_search(mut quick: Signal<Debouncer>) {
    let ticket = quick.write().schedule();
    spawn(async move {
        ticket.elapse().await;
        if !quick.read().is_current(ticket) {
            return;
        }

        let query = CONTROLLER.read().input_value().trim().to_string();
        let (tuning, api) = {
            let core = CORE.read();
            let tuning = core
                .as_ref()
                .map(|state| state.config.search)
                .unwrap_or_default();
            let api = core.as_ref().and_then(|state| state.api.clone());
            (tuning, api)
        };
        if !tuning.searchable(&query) {
            return;
        }

        let Some(api) = api else {
            tracing::debug!("quick search skipped for {query:?}: no API configured");
            return;
        };
        if let Some(body) = api.quick_search(&query, SearchKind::Crop).await {
            let names = harvest_api::suggestion_names(&body);
            tracing::info!("quick search matched {} names for {query:?}", names.len());
        }
    });
}
