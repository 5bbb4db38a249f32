//! The search controller: keystrokes in, one correctly-ordered suggestion
//! render out.
//!
//! Each search widget owns one [`SearchController`]. It tracks a small state
//! machine (`Idle`: nothing pending, `Pending`: a debounce window is
//! running, `Showing`: the panel is visible) and bundles the widget's
//! debouncer, panel, and liveness flag so every event handler goes through
//! one object.
//!
//! The asynchronous lookup is split around its await point. When a debounce
//! window elapses, the driver calls [`fire_begin`], which re-checks the
//! ticket and hands back the query to look up, captured at fire time rather
//! than keystroke time. After the source answers, the driver calls
//! [`fire_complete`] with the candidates; a delivery whose ticket has gone
//! stale in flight (more typing, a dismissal, a selection, disposal) is
//! discarded unrendered. An earlier lookup can therefore never overwrite a
//! later one, no matter how the response order falls.
//!
//! [`fire_begin`]: SearchController::fire_begin
//! [`fire_complete`]: SearchController::fire_complete

use crate::config::SearchTuning;
use crate::debounce::{DebounceTicket, Debouncer};
use crate::panel::SuggestionPanel;

/// Lifecycle phase of one search widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing pending, panel hidden.
    Idle,
    /// A debounce window is running or a lookup is in flight.
    Pending,
    /// The panel is visible with at least one candidate.
    Showing,
}

/// Outcome of accepting a suggestion: the full search the owning page must
/// now perform. The controller updates its own state first and leaves the
/// submission to the caller, so the submit always happens after the input
/// is set and the panel hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub value: String,
}

/// State machine for one search widget.
pub struct SearchController {
    tuning: SearchTuning,
    debouncer: Debouncer,
    phase: SearchPhase,
    input: String,
    panel: SuggestionPanel,
    disposed: bool,
}

impl SearchController {
    pub fn new(tuning: SearchTuning) -> Self {
        Self {
            debouncer: Debouncer::new(tuning.wait()),
            tuning,
            phase: SearchPhase::Idle,
            input: String::new(),
            panel: SuggestionPanel::new(),
            disposed: false,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Current text of the bound input.
    pub fn input_value(&self) -> &str {
        &self.input
    }

    pub fn panel(&self) -> &SuggestionPanel {
        &self.panel
    }

    /// Mirror a change of the bound input.
    ///
    /// Short queries (trimmed length at or below the tuning threshold)
    /// reset to `Idle` synchronously: the pending cycle is cancelled, the
    /// panel hides, and no lookup will run. Longer queries start (or
    /// restart) a debounce cycle; the returned ticket is what the driver
    /// sleeps on before calling [`fire_begin`](Self::fire_begin).
    pub fn input_changed(&mut self, value: &str) -> Option<DebounceTicket> {
        if self.disposed {
            return None;
        }
        self.input = value.to_string();
        if !self.tuning.searchable(self.input.trim()) {
            self.debouncer.cancel();
            self.panel.hide();
            self.phase = SearchPhase::Idle;
            return None;
        }
        self.phase = SearchPhase::Pending;
        Some(self.debouncer.schedule())
    }

    /// A debounce window elapsed. Returns the trimmed query to look up, or
    /// `None` when the cycle must not fire: the ticket was superseded or
    /// cancelled, the controller went back to `Idle`, or the widget is gone.
    pub fn fire_begin(&mut self, ticket: DebounceTicket) -> Option<String> {
        if self.disposed || !self.debouncer.is_current(ticket) {
            return None;
        }
        if self.phase == SearchPhase::Idle {
            return None;
        }
        Some(self.input.trim().to_string())
    }

    /// Deliver the candidates for a fired cycle. A stale delivery is
    /// discarded without touching the panel; a live one renders (non-empty →
    /// `Showing`, empty → panel hides and the controller returns to `Idle`).
    pub fn fire_complete(&mut self, ticket: DebounceTicket, candidates: Vec<String>) {
        if self.disposed || !self.debouncer.is_current(ticket) {
            return;
        }
        if self.phase == SearchPhase::Idle {
            return;
        }
        let showing = !candidates.is_empty();
        self.panel.render(candidates);
        self.phase = if showing {
            SearchPhase::Showing
        } else {
            SearchPhase::Idle
        };
    }

    /// Outside-click (or equivalent) dismissal: cancel whatever was pending,
    /// hide the panel, return to `Idle`. Valid and idempotent in every state.
    pub fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.panel.hide();
        self.phase = SearchPhase::Idle;
    }

    /// Accept a candidate. The input takes the candidate's value, then the
    /// panel hides, then the returned [`Selection`] is the search the owning
    /// page submits; that ordering is fixed.
    pub fn select(&mut self, candidate: &str) -> Selection {
        self.input = candidate.to_string();
        self.debouncer.cancel();
        self.panel.hide();
        self.phase = SearchPhase::Idle;
        Selection {
            value: candidate.to_string(),
        }
    }

    /// The widget left the page. Every timer fire or result delivery that
    /// arrives afterwards is a no-op; the controller never acts on behalf of
    /// a gone widget.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.debouncer.cancel();
        self.panel.hide();
        self.phase = SearchPhase::Idle;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
