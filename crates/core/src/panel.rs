//! Suggestion panel state: the dropdown region below a search input.

/// Candidate rows shown under the bound input.
///
/// One instance per search widget, owned by its controller. The backing
/// state is reused across cycles; each render replaces the rows wholesale,
/// so nothing from an earlier query can linger into the next.
#[derive(Debug, Default)]
pub struct SuggestionPanel {
    rows: Vec<String>,
    visible: bool,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows with `candidates` and show the panel. An empty list
    /// hides it instead; there is no "no results" placeholder state.
    pub fn render(&mut self, candidates: Vec<String>) {
        if candidates.is_empty() {
            self.hide();
        } else {
            self.rows = candidates;
            self.visible = true;
        }
    }

    /// Make the panel non-visible. Idempotent; old rows are kept for reuse
    /// but never exposed while hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rows to draw, in source order. Empty while hidden.
    pub fn rows(&self) -> &[String] {
        if self.visible {
            &self.rows
        } else {
            &[]
        }
    }
}
