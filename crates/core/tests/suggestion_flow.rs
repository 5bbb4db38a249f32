//! End-to-end tests for the suggestion pipeline.
//!
//! Each test plays a realistic keyboard session against a
//! SearchController wired to the built-in vocabulary, driving the debounce
//! tickets exactly the way the UI layer does: elapse, fire_begin, lookup,
//! fire_complete.

use std::time::Duration;

use harvest_core::config::SearchTuning;
use harvest_core::controller::{SearchController, SearchPhase};
use harvest_core::dismiss::DismissDispatcher;
use harvest_core::notify::{NotificationCenter, Severity};
use harvest_core::suggest::{lookup_or_empty, StaticSuggestions};
use harvest_core::validate::{validate_field, FieldRules};

/// Short debounce so tests spend milliseconds, not wall-clock seconds. The
/// window length never changes the state machine, only how long it sleeps.
fn tuning() -> SearchTuning {
    SearchTuning {
        debounce_ms: 10,
        min_query_len: 2,
    }
}

// ---------------------------------------------------------------------------
// Typing scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_wheat_session_end_to_end() {
    let source = StaticSuggestions::default();
    let mut controller = SearchController::new(tuning());

    // "wh" is too short: no cycle starts, nothing shows.
    assert!(controller.input_changed("wh").is_none());
    assert_eq!(controller.phase(), SearchPhase::Idle);

    // "whe" debounces, fires, and shows the one match.
    let ticket = controller.input_changed("whe").unwrap();
    ticket.elapse().await;
    let query = controller.fire_begin(ticket).unwrap();
    assert_eq!(query, "whe");
    let candidates = lookup_or_empty(&source, &query).await;
    controller.fire_complete(ticket, candidates);
    assert_eq!(controller.phase(), SearchPhase::Showing);
    assert_eq!(controller.panel().rows(), ["Wheat".to_string()].as_slice());

    // Accepting the row fills the input, hides the panel, and hands back
    // the search to submit, in that order.
    let selection = controller.select("Wheat");
    assert_eq!(controller.input_value(), "Wheat");
    assert!(!controller.panel().is_visible());
    assert_eq!(selection.value, "Wheat");
}

#[tokio::test]
async fn test_corn_burst_coalesces_to_one_lookup() {
    let source = StaticSuggestions::default();
    let mut controller = SearchController::new(tuning());

    // Three keystrokes inside one debounce window.
    assert!(controller.input_changed("c").is_none());
    assert!(controller.input_changed("co").is_none());
    let ticket = controller.input_changed("corn").unwrap();

    ticket.elapse().await;
    let query = controller.fire_begin(ticket).unwrap();
    assert_eq!(query, "corn");
    let candidates = lookup_or_empty(&source, &query).await;
    controller.fire_complete(ticket, candidates);
    assert_eq!(controller.panel().rows(), ["Corn".to_string()].as_slice());
}

#[tokio::test]
async fn test_superseded_window_never_fires() {
    let source = StaticSuggestions::default();
    let mut controller = SearchController::new(tuning());

    let stale = controller.input_changed("cor").unwrap();
    let live = controller.input_changed("corn").unwrap();

    // Both windows elapse; only the newer one is allowed to fire.
    stale.elapse().await;
    assert!(controller.fire_begin(stale).is_none());
    live.elapse().await;
    let query = controller.fire_begin(live).unwrap();
    let candidates = lookup_or_empty(&source, &query).await;
    controller.fire_complete(live, candidates);
    assert_eq!(controller.panel().rows(), ["Corn".to_string()].as_slice());
}

#[tokio::test]
async fn test_no_match_hides_instead_of_showing_placeholder() {
    let source = StaticSuggestions::default();
    let mut controller = SearchController::new(tuning());

    let ticket = controller.input_changed("dragonfruit").unwrap();
    ticket.elapse().await;
    let query = controller.fire_begin(ticket).unwrap();
    let candidates = lookup_or_empty(&source, &query).await;
    controller.fire_complete(ticket, candidates);

    assert_eq!(controller.phase(), SearchPhase::Idle);
    assert!(!controller.panel().is_visible());
    assert!(controller.panel().rows().is_empty());
}

#[tokio::test]
async fn test_clearing_the_input_cancels_the_inflight_cycle() {
    let mut controller = SearchController::new(tuning());

    let ticket = controller.input_changed("corn").unwrap();
    assert!(controller.input_changed("").is_none());
    ticket.elapse().await;
    assert!(controller.fire_begin(ticket).is_none());
    assert_eq!(controller.phase(), SearchPhase::Idle);
}

// ---------------------------------------------------------------------------
// Dismissal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_outside_click_dismisses_from_pending_and_showing() {
    let source = StaticSuggestions::default();
    let mut dispatcher = DismissDispatcher::new();
    let mut controller = SearchController::new(tuning());
    let widget = dispatcher.register();

    // Pending: a click that lands nowhere near the widget kills the cycle.
    let ticket = controller.input_changed("whe").unwrap();
    for id in dispatcher.resolve_click() {
        assert_eq!(id, widget);
        controller.dismiss();
    }
    ticket.elapse().await;
    assert!(controller.fire_begin(ticket).is_none());

    // Showing: same click path hides the panel.
    let ticket = controller.input_changed("whe").unwrap();
    ticket.elapse().await;
    let query = controller.fire_begin(ticket).unwrap();
    let candidates = lookup_or_empty(&source, &query).await;
    controller.fire_complete(ticket, candidates);
    assert_eq!(controller.phase(), SearchPhase::Showing);
    for _ in dispatcher.resolve_click() {
        controller.dismiss();
    }
    assert!(!controller.panel().is_visible());
    assert_eq!(controller.phase(), SearchPhase::Idle);
}

#[tokio::test]
async fn test_click_inside_the_widget_keeps_the_panel_open() {
    let source = StaticSuggestions::default();
    let mut dispatcher = DismissDispatcher::new();
    let mut controller = SearchController::new(tuning());
    let widget = dispatcher.register();

    let ticket = controller.input_changed("whe").unwrap();
    ticket.elapse().await;
    let query = controller.fire_begin(ticket).unwrap();
    let candidates = lookup_or_empty(&source, &query).await;
    controller.fire_complete(ticket, candidates);

    // Click on the input itself: noted before the page handler resolves.
    dispatcher.note_hit(widget);
    assert!(dispatcher.resolve_click().is_empty());
    assert!(controller.panel().is_visible());
}

#[tokio::test]
async fn test_unmounted_widget_ignores_its_late_timer() {
    let mut dispatcher = DismissDispatcher::new();
    let mut controller = SearchController::new(tuning());
    let widget = dispatcher.register();

    let ticket = controller.input_changed("whe").unwrap();

    // Widget leaves the page before the window elapses.
    dispatcher.dispose(widget);
    controller.dispose();

    ticket.elapse().await;
    assert!(controller.fire_begin(ticket).is_none());
    assert!(dispatcher.resolve_click().is_empty());
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_notification_expires_after_its_ttl() {
    let mut center = NotificationCenter::new(Duration::from_millis(10));
    let id = center.notify("Calendar loaded", Severity::Success);
    assert_eq!(center.entries().len(), 1);

    tokio::time::sleep(center.ttl()).await;
    assert!(center.dismiss(id));
    assert!(center.entries().is_empty());
}

#[tokio::test]
async fn test_manual_close_beats_the_expiry_timer() {
    let mut center = NotificationCenter::new(Duration::from_millis(10));
    let id = center.notify("No data found for Mango", Severity::Error);

    // User closes it immediately; the timer fires later into nothing.
    assert!(center.dismiss(id));
    tokio::time::sleep(center.ttl()).await;
    assert!(!center.dismiss(id));
}

// ---------------------------------------------------------------------------
// Validation lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_field_message_appears_and_clears_across_edits() {
    let rules = FieldRules::required_with_min(3);

    // Field loses focus while empty.
    let status = validate_field("", &rules);
    assert_eq!(status.message(), Some("This field is required."));

    // User types too little.
    let status = validate_field("ab", &rules);
    assert_eq!(status.message(), Some("Please enter at least 3 characters."));

    // User fixes it; the message goes away.
    assert!(validate_field("abc", &rules).is_valid());
}
