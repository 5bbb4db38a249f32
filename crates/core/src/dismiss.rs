//! Page-wide outside-click dismissal.
//!
//! One dispatcher exists per page, created at startup and shared by every
//! search widget; widgets register on mount and deregister on unmount, so
//! the page-level listener count stays at one no matter how many widgets
//! come and go. A click is resolved in two steps: elements belonging to a
//! widget report the hit on the way up ([`note_hit`]), then the page-level
//! handler asks [`resolve_click`] which live widgets the click missed and
//! must therefore dismiss.
//!
//! [`note_hit`]: DismissDispatcher::note_hit
//! [`resolve_click`]: DismissDispatcher::resolve_click

/// Identity of one registered search widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

/// The shared click-dismissal broker.
#[derive(Debug, Default)]
pub struct DismissDispatcher {
    next_id: u64,
    live: Vec<WidgetId>,
    hit: Option<WidgetId>,
}

impl DismissDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget and return its id. A re-mounted widget registers a
    /// fresh id after disposing its old one; ids are never reused.
    pub fn register(&mut self) -> WidgetId {
        self.next_id += 1;
        let id = WidgetId(self.next_id);
        self.live.push(id);
        id
    }

    /// Deregister a widget. Unknown or already-disposed ids are ignored, so
    /// unmount paths can call this unconditionally.
    pub fn dispose(&mut self, id: WidgetId) {
        self.live.retain(|live| *live != id);
        if self.hit == Some(id) {
            self.hit = None;
        }
    }

    pub fn is_live(&self, id: WidgetId) -> bool {
        self.live.contains(&id)
    }

    /// An element belonging to `id` (its input or its panel) saw the click
    /// currently bubbling toward the page-level handler.
    pub fn note_hit(&mut self, id: WidgetId) {
        if self.is_live(id) {
            self.hit = Some(id);
        }
    }

    /// The page-level handler saw the click: every live widget the click did
    /// not land on must dismiss. Consumes the pending hit, so each click is
    /// resolved exactly once.
    pub fn resolve_click(&mut self) -> Vec<WidgetId> {
        let hit = self.hit.take();
        self.live
            .iter()
            .copied()
            .filter(|id| Some(*id) != hit)
            .collect()
    }
}
