//! Test observer — records every selection notification.

use std::sync::{Arc, Mutex};

use storyseed_core::observer::SelectionObserver;

#[derive(Debug, Default)]
struct Recorded {
    selections: Vec<Vec<String>>,
    validity: Vec<bool>,
}

/// An observer that records every notification it receives. Clones share the
/// same record, so one handle can be subscribed while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every selection list emitted so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn selections(&self) -> Vec<Vec<String>> {
        self.inner.lock().unwrap().selections.clone()
    }

    /// Returns every validity value emitted so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn validity(&self) -> Vec<bool> {
        self.inner.lock().unwrap().validity.clone()
    }

    /// Returns the most recent selection list, if any was emitted.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn last_selection(&self) -> Option<Vec<String>> {
        self.inner.lock().unwrap().selections.last().cloned()
    }
}

impl SelectionObserver for RecordingObserver {
    fn on_selection_change(&self, selected: &[String]) {
        self.inner.lock().unwrap().selections.push(selected.to_vec());
    }

    fn on_validity_change(&self, is_valid: bool) {
        self.inner.lock().unwrap().validity.push(is_valid);
    }
}
