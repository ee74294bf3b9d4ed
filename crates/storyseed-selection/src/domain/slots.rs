//! Custom entry slots and their debounce timers.

use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

/// Stable identity of a custom entry slot. Identities are never reused, so a
/// handle to a deleted slot can not alias a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) u64);

impl SlotId {
    /// Returns the raw identifier.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// A pending single-shot commit owned by exactly one slot.
///
/// Dropping the timer cancels it; there is no detached callback that could
/// outlive the slot.
#[derive(Debug)]
pub struct DebounceTimer {
    deadline: Instant,
}

impl DebounceTimer {
    /// Arms a timer that expires `delay` after `now`.
    #[must_use]
    pub fn armed(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    /// Cancels the pending deadline and schedules a new one.
    pub fn rearm(&mut self, now: Instant, delay: Duration) {
        self.deadline = now + delay;
    }

    /// Returns the instant at which the timer expires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns `true` once `now` has reached the deadline.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Cancels the timer.
    pub fn cancel(self) {
        trace!("debounce timer cancelled");
    }
}

/// Lifecycle of a slot.
#[derive(Debug)]
pub enum SlotState {
    /// No text; the trailing "add new" slot.
    Empty,
    /// Text typed but not yet committed to the selection.
    Typing(DebounceTimer),
    /// Text committed as `choice`. `owned` is set while the choice is in
    /// the store because this slot put it there; edits only touch the store
    /// for an owned choice.
    Committed {
        /// The committed text.
        choice: String,
        /// Whether this slot holds the choice in the store.
        owned: bool,
    },
}

/// One free-text entry position.
#[derive(Debug)]
pub struct CustomSlot {
    pub(crate) id: SlotId,
    pub(crate) text: String,
    pub(crate) state: SlotState,
}

impl CustomSlot {
    pub(crate) fn empty(id: SlotId) -> Self {
        Self {
            id,
            text: String::new(),
            state: SlotState::Empty,
        }
    }

    /// Returns the slot identity.
    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the visible text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> &SlotState {
        &self.state
    }

    /// Returns `true` for the empty "add new" slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    /// Returns `true` while a commit is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, SlotState::Typing(_))
    }

    /// Returns the choice this slot committed, if any.
    #[must_use]
    pub fn committed_choice(&self) -> Option<&str> {
        match &self.state {
            SlotState::Committed { choice, .. } => Some(choice),
            _ => None,
        }
    }

    /// Returns `true` if this slot's committed choice was inserted by it and
    /// has not since been released.
    #[must_use]
    pub fn owns_choice(&self) -> bool {
        matches!(self.state, SlotState::Committed { owned: true, .. })
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        match &self.state {
            SlotState::Typing(timer) => Some(timer.deadline()),
            _ => None,
        }
    }
}
