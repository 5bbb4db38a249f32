//! Transient notifications: stacked messages with a fixed lifetime.
//!
//! The center only stores state; timers live with the driver. Each entry
//! gets a unique id, the expiry task sleeps out the TTL and then calls
//! [`dismiss`](NotificationCenter::dismiss) with that id. If the user
//! closed the entry first, the id no longer resolves and the expiry is a
//! no-op. Id lookup *is* the liveness check.

use std::time::Duration;

/// Default on-screen lifetime of a notification.
pub const DEFAULT_TTL: Duration = Duration::from_millis(5_000);

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Style modifier used by the page's alert classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Identity of one on-screen notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// One stacked message.
#[derive(Clone, Debug)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
}

impl Notification {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Store of live notifications, in arrival order. Unbounded; entries leave
/// when their expiry fires or the user closes them.
#[derive(Debug)]
pub struct NotificationCenter {
    next_id: u64,
    entries: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            ttl,
        }
    }

    /// Add a message to the stack. The caller arranges the expiry timer and
    /// calls [`dismiss`](Self::dismiss) with the returned id when it fires.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.entries.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Remove an entry, whether by expiry or by the user closing it early.
    /// Returns `false` when the entry is already gone, which is how a late
    /// expiry timer discovers it has nothing left to do.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Live entries, oldest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// On-screen lifetime the driver should sleep out before dismissing.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_stack_in_arrival_order() {
        let mut center = NotificationCenter::default();
        center.notify("saved", Severity::Success);
        center.notify("network lost", Severity::Error);
        let messages: Vec<&str> = center.entries().iter().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["saved", "network lost"]);
    }

    #[test]
    fn each_entry_gets_a_distinct_id() {
        let mut center = NotificationCenter::default();
        let a = center.notify("one", Severity::Success);
        let b = center.notify("two", Severity::Success);
        assert_ne!(a, b);
    }

    #[test]
    fn dismiss_removes_only_the_named_entry() {
        let mut center = NotificationCenter::default();
        let first = center.notify("first", Severity::Success);
        center.notify("second", Severity::Error);
        assert!(center.dismiss(first));
        assert_eq!(center.entries().len(), 1);
        assert_eq!(center.entries()[0].message(), "second");
    }

    #[test]
    fn late_expiry_of_a_closed_entry_is_a_noop() {
        let mut center = NotificationCenter::default();
        let id = center.notify("closing early", Severity::Success);
        assert!(center.dismiss(id)); // user closes it
        assert!(!center.dismiss(id)); // expiry timer fires afterwards
        assert!(center.entries().is_empty());
    }

    #[test]
    fn default_ttl_matches_the_page_constant() {
        let center = NotificationCenter::default();
        assert_eq!(center.ttl(), Duration::from_millis(5_000));
    }

    #[test]
    fn severities_carry_their_style_modifier() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
    }
}
