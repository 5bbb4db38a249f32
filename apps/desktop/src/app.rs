//! Root application component: page shell, status bar, and the single
//! page-level click handler that drives outside-click dismissal.

use dioxus::prelude::*;

use harvest_api::dataset_stats;
use harvest_core::controller::SearchController;
use harvest_core::notify::NotificationCenter;

use crate::calendar_view::CalendarSection;
use crate::form::CropLookupForm;
use crate::notifications::NotificationLayer;
use crate::search::SearchSection;
use crate::state::*;
use crate::INITIAL_STATE;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Move the pre-launch environment into the signal world exactly once,
    // then kick off the one-shot stats refresh for the status bar.
    use_hook(|| {
        let Some(state) = INITIAL_STATE.lock().unwrap().take() else {
            return;
        };
        *CONTROLLER.write() = SearchController::new(state.config.search);
        *NOTICES.write() = NotificationCenter::new(state.config.notify_ttl());
        let api = state.api.clone();
        *CORE.write() = Some(state);

        if let Some(api) = api {
            spawn(async move {
                let Some(body) = api.stats().await else {
                    return;
                };
                if let Some(stats) = dataset_stats(&body) {
                    tracing::info!(
                        "server dataset: {} crops, {} regions, {} records",
                        stats.total_crops,
                        stats.total_regions,
                        stats.total_records
                    );
                    *STATS.write() = stats;
                }
            });
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            // Every click on the page bubbles up to here; widgets the click
            // did not land on dismiss themselves.
            onclick: move |_| resolve_page_click(),

            Navbar {}

            div {
                class: "content-area",

                SearchSection {}
                CropLookupForm {}
                CalendarSection {}
            }

            StatusBar {}
            NotificationLayer {}
        }
    }
}

/// Route one resolved page click to every widget it missed.
fn resolve_page_click() {
    let missed = DISPATCHER.write().resolve_click();
    if missed.is_empty() {
        return;
    }
    let search_widget = *SEARCH_WIDGET.read();
    for id in missed {
        if Some(id) == search_widget {
            CONTROLLER.write().dismiss();
        }
    }
}

/// Top bar with the site identity.
#[component]
fn Navbar() -> Element {
    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-brand", "Harvest Calendar" }
            span { class: "navbar-tagline", "Crop sowing and harvest periods" }
        }
    }
}

/// Status bar at the bottom of the app.
#[component]
fn StatusBar() -> Element {
    let stats = STATS.read();
    let crop_label = SELECTED_CROP
        .read()
        .as_deref()
        .map(|crop| format!("viewing {crop}"))
        .unwrap_or_default();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-stats", "{stats.total_crops} crops" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-stats", "{stats.total_regions} regions" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-stats", "{stats.total_records} records" }
            if !crop_label.is_empty() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-crop", "{crop_label}" }
            }
        }
    }
}
