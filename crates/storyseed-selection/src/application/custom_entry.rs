//! Debounced free-text entries layered on a selection store.
//!
//! New entries only become choices once their text has settled for the
//! debounce period, so the selection-changed cascade does not run on every
//! keystroke. Edits to an entry that is already a choice apply immediately.

use std::time::Duration;

use storyseed_core::clock::Clock;
use storyseed_core::error::DomainError;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::slots::{CustomSlot, DebounceTimer, SlotId, SlotState};
use crate::domain::store::{SelectionStore, ToggleOutcome};

/// Quiet period before a new custom entry is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// What an edit did to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEdit {
    /// The trailing slot received its first text; a commit is scheduled.
    Started,
    /// A pending commit was pushed back.
    Rescheduled,
    /// A pending entry, or a committed entry holding no choice, was cleared
    /// and its slot deleted.
    Discarded,
    /// A committed entry was renamed in the selection.
    Updated,
    /// A committed entry holding no choice was renamed; the selection is
    /// untouched.
    Renamed,
    /// A committed entry was renamed to a choice that is already selected.
    /// Its own choice was dropped and the slot no longer holds one.
    Merged,
    /// A committed entry was cleared, deselected and its slot deleted.
    Removed,
    /// Nothing changed.
    Unchanged,
}

/// The custom entry slots of one grid together with the grid's store.
#[derive(Debug)]
pub struct CustomEntryPipeline {
    store: SelectionStore,
    slots: Vec<CustomSlot>,
    trailing: SlotId,
    next_id: u64,
    debounce: Duration,
}

impl CustomEntryPipeline {
    /// Creates a pipeline over `store` with one empty slot.
    #[must_use]
    pub fn new(store: SelectionStore, debounce: Duration) -> Self {
        let mut pipeline = Self {
            store,
            slots: Vec::new(),
            trailing: SlotId(0),
            next_id: 0,
            debounce,
        };
        pipeline.ensure_trailing_empty();
        pipeline
    }

    /// Returns the grid's store.
    #[must_use]
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Returns the grid's store for predefined-choice toggles.
    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    /// Returns the slots in display order; the last one is always empty when
    /// the pipeline is idle.
    #[must_use]
    pub fn slots(&self) -> &[CustomSlot] {
        &self.slots
    }

    /// Looks up a slot by identity.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&CustomSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Returns the identity of the trailing empty slot. Every mutation ends
    /// with this slot last in `slots()`.
    #[must_use]
    pub fn trailing_slot(&self) -> SlotId {
        self.trailing
    }

    /// Returns the debounce period.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Applies the slot's new text as typed at `now`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotNotFound` if `id` does not name a live slot.
    pub fn edit(&mut self, id: SlotId, text: &str, now: Instant) -> Result<SlotEdit, DomainError> {
        let index = self.index_of(id)?;
        let debounce = self.debounce;
        let slot = &mut self.slots[index];

        let edit = match &mut slot.state {
            SlotState::Empty if text.is_empty() => SlotEdit::Unchanged,
            SlotState::Empty => {
                text.clone_into(&mut slot.text);
                slot.state = SlotState::Typing(DebounceTimer::armed(now, debounce));
                SlotEdit::Started
            }
            SlotState::Typing(_) if text.is_empty() => {
                let removed = self.slots.remove(index);
                if let SlotState::Typing(timer) = removed.state {
                    timer.cancel();
                }
                SlotEdit::Discarded
            }
            SlotState::Typing(timer) => {
                timer.rearm(now, debounce);
                text.clone_into(&mut slot.text);
                SlotEdit::Rescheduled
            }
            SlotState::Committed { choice, owned } if text.is_empty() => {
                let (choice, owned) = (std::mem::take(choice), *owned);
                self.slots.remove(index);
                if owned {
                    self.store.remove(&choice);
                    SlotEdit::Removed
                } else {
                    SlotEdit::Discarded
                }
            }
            SlotState::Committed { choice, .. } if choice.as_str() == text => SlotEdit::Unchanged,
            SlotState::Committed { choice, owned } => {
                let old = std::mem::replace(choice, text.to_owned());
                text.clone_into(&mut slot.text);
                if !*owned {
                    SlotEdit::Renamed
                } else if self.store.is_selected(text) {
                    *owned = false;
                    self.store.remove(&old);
                    SlotEdit::Merged
                } else if self.store.update(&old, text) {
                    SlotEdit::Updated
                } else {
                    *owned = false;
                    SlotEdit::Renamed
                }
            }
        };

        debug!(slot = %id, ?edit, "custom entry edited");
        self.ensure_trailing_empty();
        Ok(edit)
    }

    /// Handles a click on a slot. A pending entry is committed at once; a
    /// committed entry is toggled in the store and holds its choice only if
    /// the toggle selected it; the empty slot ignores clicks.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotNotFound` if `id` does not name a live slot.
    pub fn click(&mut self, id: SlotId) -> Result<(), DomainError> {
        let index = self.index_of(id)?;
        match &self.slots[index].state {
            SlotState::Empty => {}
            SlotState::Typing(_) => self.commit(index),
            SlotState::Committed { choice, .. } => {
                let choice = choice.clone();
                let outcome = self.store.toggle(&choice);
                let held = matches!(outcome, ToggleOutcome::Added { .. })
                    && self.store.is_selected(&choice);
                if let SlotState::Committed { owned, .. } = &mut self.slots[index].state {
                    *owned = held;
                }
            }
        }
        Ok(())
    }

    /// Returns the earliest pending commit deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.iter().filter_map(CustomSlot::deadline).min()
    }

    /// Returns `true` while any entry awaits its commit.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.slots.iter().any(CustomSlot::is_pending)
    }

    /// Commits every entry whose deadline has passed at `now`, in slot
    /// order, and returns their identities.
    pub fn fire_due(&mut self, now: Instant) -> Vec<SlotId> {
        let due: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(&slot.state, SlotState::Typing(t) if t.is_due(now)))
            .map(|(index, _)| index)
            .collect();

        let mut fired = Vec::with_capacity(due.len());
        for index in due {
            fired.push(self.slots[index].id);
            self.commit(index);
        }
        fired
    }

    /// Sleeps until the next pending deadline and fires it. Returns
    /// immediately with nothing when no commit is pending.
    pub async fn wait_for_commit(&mut self, clock: &dyn Clock) -> Vec<SlotId> {
        let Some(deadline) = self.next_deadline() else {
            return Vec::new();
        };
        tokio::time::sleep_until(deadline).await;
        self.fire_due(clock.now())
    }

    fn index_of(&self, id: SlotId) -> Result<usize, DomainError> {
        self.slots
            .iter()
            .position(|s| s.id == id)
            .ok_or(DomainError::SlotNotFound(id.0))
    }

    /// Commits the slot's text. The slot owns the choice only if the commit
    /// inserted it and it survived eviction.
    fn commit(&mut self, index: usize) {
        let choice = self.slots[index].text.clone();
        let owned = self.store.select(&choice) && self.store.is_selected(&choice);
        let slot = &mut self.slots[index];
        let committed = SlotState::Committed {
            choice: choice.clone(),
            owned,
        };
        if let SlotState::Typing(timer) = std::mem::replace(&mut slot.state, committed) {
            timer.cancel();
        }
        debug!(slot = %slot.id, choice = %choice, owned, "custom entry committed");
    }

    fn ensure_trailing_empty(&mut self) {
        let trailing_empty = self.slots.last().is_some_and(CustomSlot::is_empty);
        if !trailing_empty {
            let id = SlotId(self.next_id);
            self.next_id += 1;
            self.trailing = id;
            self.slots.push(CustomSlot::empty(id));
        }
    }
}
