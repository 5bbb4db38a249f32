//! Global application state using Dioxus signals.

use std::path::PathBuf;

use dioxus::prelude::*;

use harvest_api::ApiClient;
use harvest_core::calendar::{self, DatasetStats};
use harvest_core::config::{AppConfig, SearchTuning};
use harvest_core::controller::SearchController;
use harvest_core::dismiss::{DismissDispatcher, WidgetId};
use harvest_core::notify::{NotificationCenter, Severity};
use harvest_core::suggest::StaticSuggestions;

use crate::calendar_view::{self, DisplayRow};
use crate::notifications::push_notice;

/// Immutable startup environment: configuration, the optional API client,
/// and the offline suggestion vocabulary. Created once before launch.
pub struct AppState {
    pub config: AppConfig,
    pub api: Option<ApiClient>,
    pub source: StaticSuggestions,
}

impl AppState {
    /// Load configuration from the current working directory.
    pub fn from_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_path(&cwd)
    }

    pub fn from_path(root: &std::path::Path) -> Self {
        let config = AppConfig::load(root);
        let api = config.api_base.as_deref().map(ApiClient::new);
        if let Some(base) = config.api_base.as_deref() {
            tracing::info!("using calendar API at {base}");
        } else {
            tracing::info!("no API configured, running offline");
        }
        Self {
            config,
            api,
            source: StaticSuggestions::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Startup environment, set once on first render
pub static CORE: GlobalSignal<Option<AppState>> = Signal::global(|| None);

/// The crop search widget's state machine
pub static CONTROLLER: GlobalSignal<SearchController> =
    Signal::global(|| SearchController::new(SearchTuning::default()));

/// Page-wide outside-click dismissal broker
pub static DISPATCHER: GlobalSignal<DismissDispatcher> =
    Signal::global(|| DismissDispatcher::new());

/// Dismissal id of the mounted crop search widget
pub static SEARCH_WIDGET: GlobalSignal<Option<WidgetId>> = Signal::global(|| None);

/// Live notifications
pub static NOTICES: GlobalSignal<NotificationCenter> =
    Signal::global(|| NotificationCenter::default());

/// Crop whose calendar is on screen
pub static SELECTED_CROP: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Rows of the calendar table
pub static CALENDAR_ROWS: GlobalSignal<Vec<DisplayRow>> = Signal::global(|| vec![]);

/// Headline dataset counts for the status bar
pub static STATS: GlobalSignal<DatasetStats> = Signal::global(|| calendar::stats());

// ---------------------------------------------------------------------------
// Search submission
// ---------------------------------------------------------------------------

/// Perform the full crop search the page's forms submit: render the built-in
/// calendar immediately, then let the server refresh the rows if it has some
/// and still matches the crop on screen by the time it answers.
pub fn submit_search(crop: &str, region: Option<&str>) {
    let crop = crop.trim().to_string();
    if crop.is_empty() {
        return;
    }
    let region = region
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);
    tracing::info!("searching calendar for {crop:?} (region {region:?})");

    let month = calendar_view::current_month();
    let rows = calendar_view::builtin_rows(&crop, region.as_deref(), month);
    if rows.is_empty() {
        push_notice(format!("No data found for {crop}"), Severity::Error);
    }
    *SELECTED_CROP.write() = Some(crop.clone());
    *CALENDAR_ROWS.write() = rows;

    let api = CORE.read().as_ref().and_then(|state| state.api.clone());
    if let Some(api) = api {
        spawn(async move {
            let Some(body) = api.crop_calendar(&crop, region.as_deref()).await else {
                return;
            };
            let remote = harvest_api::calendar_rows(&body);
            if remote.is_empty() {
                return;
            }
            // A newer search may have landed while this one was in flight.
            if SELECTED_CROP.read().as_deref() != Some(crop.as_str()) {
                return;
            }
            tracing::info!("server answered {} calendar rows for {crop:?}", remote.len());
            *CALENDAR_ROWS.write() = calendar_view::remote_rows(remote, month);
        });
    }
}
