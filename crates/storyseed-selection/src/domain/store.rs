//! The bounded selection store behind every choice grid.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storyseed_core::cue::FeedbackCue;
use storyseed_core::error::DomainError;
use storyseed_core::observer::SelectionObserver;
use tracing::{debug, warn};

/// Capacity and validity threshold of a grid.
///
/// `max` bounds the selection; `min` is advisory and only feeds the validity
/// predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBounds {
    /// Minimum number of selected choices for the grid to be valid.
    pub min: usize,
    /// Maximum number of selected choices retained.
    pub max: usize,
}

impl SelectionBounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::Validation(format!(
                "selection min ({min}) must not exceed max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Bounds requiring exactly `n` choices.
    #[must_use]
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }
}

/// Result of a `toggle` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The choice was appended; `evicted` lists the oldest entries dropped to
    /// stay within capacity, oldest first.
    Added {
        /// Entries removed from the front of the list.
        evicted: Vec<String>,
    },
    /// The choice was already selected and has been removed.
    Removed,
}

/// Selection state of one choice grid.
pub struct SelectionStore {
    bounds: SelectionBounds,
    selected: Vec<String>,
    cue: Arc<dyn FeedbackCue>,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl SelectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(bounds: SelectionBounds, cue: Arc<dyn FeedbackCue>) -> Self {
        Self {
            bounds,
            selected: Vec::new(),
            cue,
            observers: Vec::new(),
        }
    }

    /// Creates a store pre-seeded with `seed`. Duplicates are dropped and the
    /// oldest seeds are trimmed if there are more than `max`. Seeding plays no
    /// cue and emits no notification.
    #[must_use]
    pub fn with_selection<I, S>(bounds: SelectionBounds, seed: I, cue: Arc<dyn FeedbackCue>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new(bounds, cue);
        for choice in seed {
            let choice = choice.into();
            if !store.selected.contains(&choice) {
                store.selected.push(choice);
            }
        }
        store.trim_to_capacity();
        store
    }

    /// Registers an observer that is notified after every mutation.
    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the configured bounds.
    #[must_use]
    pub fn bounds(&self) -> SelectionBounds {
        self.bounds
    }

    /// Returns the current selection, oldest first.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns the number of selected choices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns `true` if `choice` is currently selected.
    #[must_use]
    pub fn is_selected(&self, choice: &str) -> bool {
        self.selected.iter().any(|c| c == choice)
    }

    /// Returns `true` when at least `min` choices are selected.
    #[must_use]
    pub fn validity(&self) -> bool {
        self.selected.len() >= self.bounds.min
    }

    /// Removes `choice` if it is selected, otherwise appends it and evicts
    /// the oldest entries beyond capacity. Only the insertion branch plays
    /// the feedback cue.
    pub fn toggle(&mut self, choice: &str) -> ToggleOutcome {
        let outcome = if let Some(index) = self.position(choice) {
            self.selected.remove(index);
            debug!(choice, "deselected");
            ToggleOutcome::Removed
        } else {
            let evicted = self.insert(choice);
            ToggleOutcome::Added { evicted }
        };
        self.emit();
        outcome
    }

    /// Appends `choice` unless it is already selected. Returns `true` if the
    /// selection changed.
    pub fn select(&mut self, choice: &str) -> bool {
        if self.is_selected(choice) {
            return false;
        }
        self.insert(choice);
        self.emit();
        true
    }

    /// Replaces `old` with `new` in place. If `new` is already selected
    /// elsewhere, `old` is dropped instead so the list stays duplicate-free.
    /// Returns `true` if the selection changed.
    pub fn update(&mut self, old: &str, new: &str) -> bool {
        if old == new {
            return false;
        }
        let Some(index) = self.position(old) else {
            return false;
        };
        if self.is_selected(new) {
            self.selected.remove(index);
        } else {
            new.clone_into(&mut self.selected[index]);
        }
        debug!(old, new, "updated selected choice");
        self.emit();
        true
    }

    /// Removes `choice` if present. Returns `true` if the selection changed.
    pub fn remove(&mut self, choice: &str) -> bool {
        let Some(index) = self.position(choice) else {
            return false;
        };
        self.selected.remove(index);
        debug!(choice, "removed");
        self.emit();
        true
    }

    fn position(&self, choice: &str) -> Option<usize> {
        self.selected.iter().position(|c| c == choice)
    }

    /// Append-then-trim. With `max = 0` the new choice is evicted as well.
    fn insert(&mut self, choice: &str) -> Vec<String> {
        if let Err(e) = self.cue.play() {
            warn!(error = %e, "feedback cue failed");
        }
        self.selected.push(choice.to_owned());
        let evicted = self.trim_to_capacity();
        debug!(choice, evicted = evicted.len(), "selected");
        evicted
    }

    fn trim_to_capacity(&mut self) -> Vec<String> {
        let overflow = self.selected.len().saturating_sub(self.bounds.max);
        self.selected.drain(..overflow).collect()
    }

    fn emit(&self) {
        let is_valid = self.validity();
        for observer in &self.observers {
            observer.on_selection_change(&self.selected);
            observer.on_validity_change(is_valid);
        }
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("bounds", &self.bounds)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyseed_test_support::{FailingCue, RecordingCue, RecordingObserver};

    fn store(min: usize, max: usize) -> SelectionStore {
        SelectionStore::new(SelectionBounds { min, max }, Arc::new(RecordingCue::new()))
    }

    #[test]
    fn test_bounds_new_rejects_min_above_max() {
        let result = SelectionBounds::new(3, 2);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_toggle_adds_then_removes_choice() {
        // Arrange
        let mut store = store(1, 3);
        store.toggle("Noir");
        let before = store.selected().to_vec();

        // Act
        let added = store.toggle("Gothic");
        let removed = store.toggle("Gothic");

        // Assert
        assert_eq!(added, ToggleOutcome::Added { evicted: vec![] });
        assert_eq!(removed, ToggleOutcome::Removed);
        assert_eq!(store.selected(), before.as_slice());
    }

    #[test]
    fn test_toggle_evicts_oldest_when_at_capacity() {
        // Arrange
        let mut store = store(3, 3);
        for choice in ["Action", "Drama", "Romance"] {
            store.toggle(choice);
        }

        // Act
        let outcome = store.toggle("Comedy");

        // Assert
        assert_eq!(
            outcome,
            ToggleOutcome::Added {
                evicted: vec!["Action".to_owned()]
            }
        );
        assert_eq!(store.selected(), ["Drama", "Romance", "Comedy"]);
    }

    #[test]
    fn test_capacity_holds_after_every_toggle() {
        // Arrange
        let mut store = store(0, 2);
        let sequence = ["a", "b", "c", "a", "d", "d", "e", "b", "f"];

        // Act / Assert
        for choice in sequence {
            store.toggle(choice);
            assert!(store.len() <= 2, "capacity exceeded after toggling {choice}");
        }
    }

    #[test]
    fn test_toggle_with_zero_capacity_retains_nothing() {
        // Arrange
        let mut store = store(0, 0);

        // Act
        let outcome = store.toggle("Noir");

        // Assert
        assert_eq!(
            outcome,
            ToggleOutcome::Added {
                evicted: vec!["Noir".to_owned()]
            }
        );
        assert!(store.is_empty());
        assert!(store.validity());
    }

    #[test]
    fn test_cue_plays_only_on_insertion() {
        // Arrange
        let cue = Arc::new(RecordingCue::new());
        let mut store = SelectionStore::new(SelectionBounds::exactly(2), cue.clone());

        // Act
        store.toggle("Mystery");
        store.toggle("Humor");
        store.toggle("Humor");

        // Assert
        assert_eq!(cue.plays(), 2);
    }

    #[test]
    fn test_failing_cue_does_not_affect_selection() {
        // Arrange
        let mut store = SelectionStore::new(SelectionBounds::exactly(1), Arc::new(FailingCue));

        // Act
        store.toggle("Cozy");

        // Assert
        assert_eq!(store.selected(), ["Cozy"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        // Arrange
        let mut store = store(0, 3);
        for choice in ["Noir", "Pirates", "Gothic"] {
            store.toggle(choice);
        }

        // Act
        let changed = store.update("Pirates", "Space pirates");

        // Assert
        assert!(changed);
        assert_eq!(store.selected(), ["Noir", "Space pirates", "Gothic"]);
    }

    #[test]
    fn test_update_of_absent_choice_is_noop() {
        let mut store = store(0, 3);
        store.toggle("Noir");

        assert!(!store.update("Gothic", "Horror"));
        assert_eq!(store.selected(), ["Noir"]);
    }

    #[test]
    fn test_update_onto_existing_choice_collapses_duplicate() {
        // Arrange
        let mut store = store(0, 3);
        store.toggle("Noir");
        store.toggle("Noi");

        // Act
        store.update("Noi", "Noir");

        // Assert
        assert_eq!(store.selected(), ["Noir"]);
    }

    #[test]
    fn test_remove_absent_choice_emits_nothing() {
        // Arrange
        let observer = RecordingObserver::new();
        let mut store = store(1, 3);
        store.subscribe(observer.clone());

        // Act
        let changed = store.remove("Noir");

        // Assert
        assert!(!changed);
        assert!(observer.selections().is_empty());
        assert!(observer.validity().is_empty());
    }

    #[test]
    fn test_select_is_noop_when_already_selected() {
        // Arrange
        let cue = Arc::new(RecordingCue::new());
        let mut store = SelectionStore::new(SelectionBounds::exactly(3), cue.clone());
        store.toggle("Noir");

        // Act
        let changed = store.select("Noir");

        // Assert
        assert!(!changed);
        assert_eq!(store.selected(), ["Noir"]);
        assert_eq!(cue.plays(), 1);
    }

    #[test]
    fn test_every_mutation_emits_selection_and_validity() {
        // Arrange
        let observer = RecordingObserver::new();
        let mut store = store(2, 2);
        store.subscribe(observer.clone());

        // Act
        store.toggle("Mystery");
        store.toggle("Humor");
        store.remove("Mystery");

        // Assert
        assert_eq!(
            observer.selections(),
            vec![
                vec!["Mystery".to_owned()],
                vec!["Mystery".to_owned(), "Humor".to_owned()],
                vec!["Humor".to_owned()],
            ]
        );
        assert_eq!(observer.validity(), vec![false, true, false]);
    }

    #[test]
    fn test_min_zero_is_always_valid() {
        let store = store(0, 3);

        assert!(store.validity());
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        // Arrange
        let mut store = store(5, 1);

        // Act
        store.toggle("a");
        store.toggle("b");

        // Assert
        assert_eq!(store.selected(), ["b"]);
        assert!(!store.validity());
    }

    #[test]
    fn test_with_selection_dedupes_and_trims_seed() {
        let store = SelectionStore::with_selection(
            SelectionBounds::exactly(2),
            ["World", "City", "World", "Town"],
            Arc::new(RecordingCue::new()),
        );

        assert_eq!(store.selected(), ["City", "Town"]);
    }

    #[test]
    fn test_choices_compare_exactly() {
        let mut store = store(0, 3);
        store.toggle("noir");

        assert!(!store.is_selected("Noir"));
        assert!(!store.is_selected(" noir"));
        assert!(store.is_selected("noir"));
    }
}
