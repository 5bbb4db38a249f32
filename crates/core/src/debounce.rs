//! Time-delay coalescing for keystroke-driven work.
//!
//! A [`Debouncer`] owns a generation counter; every [`schedule`] bumps it
//! and hands back a [`DebounceTicket`] stamped with the new generation. The
//! holder sleeps out the window and then asks [`is_current`] whether its
//! ticket still names the live cycle; any later schedule or cancel has
//! silently invalidated it. Nothing is ever torn down in flight, stale
//! cycles just fail the check and fall through.
//!
//! [`schedule`]: Debouncer::schedule
//! [`is_current`]: Debouncer::is_current

use std::time::Duration;

/// Handle for one scheduled debounce cycle.
///
/// Copyable so it can be moved into a spawned task; it carries no liveness
/// of its own. Only the owning [`Debouncer`] can say whether it is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    wait: Duration,
}

impl DebounceTicket {
    /// Sleep out the debounce window. Elapsing never validates the ticket by
    /// itself; the holder re-checks against the owning debouncer afterwards.
    pub async fn elapse(self) {
        tokio::time::sleep(self.wait).await;
    }

    /// The window this ticket waits out.
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

/// Coalesces rapid repeated triggers into a single delayed action.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: 0,
        }
    }

    /// Start a new cycle, superseding whatever cycle was pending.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation += 1;
        DebounceTicket {
            generation: self.generation,
            wait: self.wait,
        }
    }

    /// Invalidate the pending cycle, if any, without starting a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Whether `ticket` still names the live cycle.
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}
