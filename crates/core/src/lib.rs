//! Core library for Harvest Calendar: the interactive layer of the crop
//! calendar pages, kept free of any UI toolkit.
//!
//! Everything the page does between a keystroke and a rendered suggestion
//! lives here as plain state machines: debounce coalescing, the suggestion
//! lookup pipeline with stale-result suppression, outside-click dismissal,
//! transient notifications, and client-side form validation. The desktop
//! front-end drives these objects from event handlers; tests drive them
//! directly.

pub mod calendar;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod dismiss;
pub mod notify;
pub mod panel;
pub mod suggest;
pub mod validate;

pub use calendar::{CalendarEntry, DatasetStats};
pub use config::{AppConfig, SearchTuning};
pub use controller::{SearchController, SearchPhase, Selection};
pub use debounce::{DebounceTicket, Debouncer};
pub use dismiss::{DismissDispatcher, WidgetId};
pub use notify::{Notification, NotificationCenter, NotificationId, Severity};
pub use panel::SuggestionPanel;
pub use suggest::{lookup_or_empty, LookupError, StaticSuggestions, SuggestionSource};
pub use validate::{validate_field, FieldRules, FieldStatus};
