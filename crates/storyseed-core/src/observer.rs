//! Selection change notifications.

/// Receives the settled state of a selection grid after every mutation.
///
/// Notifications are delivered synchronously, selection first and validity
/// second, from within the mutating call.
pub trait SelectionObserver: Send + Sync {
    /// Called with the full selection list, oldest entry first.
    fn on_selection_change(&self, selected: &[String]);

    /// Called with the recomputed validity (`len >= min`).
    fn on_validity_change(&self, is_valid: bool);
}

/// Adapts a pair of closures into a `SelectionObserver`.
pub struct CallbackObserver<S, V>
where
    S: Fn(&[String]) + Send + Sync,
    V: Fn(bool) + Send + Sync,
{
    on_selection: S,
    on_validity: V,
}

impl<S, V> CallbackObserver<S, V>
where
    S: Fn(&[String]) + Send + Sync,
    V: Fn(bool) + Send + Sync,
{
    /// Create an observer from a selection callback and a validity callback.
    #[must_use]
    pub fn new(on_selection: S, on_validity: V) -> Self {
        Self {
            on_selection,
            on_validity,
        }
    }
}

impl<S, V> SelectionObserver for CallbackObserver<S, V>
where
    S: Fn(&[String]) + Send + Sync,
    V: Fn(bool) + Send + Sync,
{
    fn on_selection_change(&self, selected: &[String]) {
        (self.on_selection)(selected);
    }

    fn on_validity_change(&self, is_valid: bool) {
        (self.on_validity)(is_valid);
    }
}

impl<S, V> std::fmt::Debug for CallbackObserver<S, V>
where
    S: Fn(&[String]) + Send + Sync,
    V: Fn(bool) + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_callback_observer_forwards_both_notifications() {
        // Arrange
        let seen = Arc::new(Mutex::new(Vec::new()));
        let validity = Arc::new(Mutex::new(Vec::new()));
        let seen_sink = Arc::clone(&seen);
        let validity_sink = Arc::clone(&validity);
        let observer = CallbackObserver::new(
            move |selected: &[String]| seen_sink.lock().unwrap().push(selected.to_vec()),
            move |is_valid| validity_sink.lock().unwrap().push(is_valid),
        );

        // Act
        observer.on_selection_change(&["Noir".to_owned()]);
        observer.on_validity_change(false);

        // Assert
        assert_eq!(*seen.lock().unwrap(), vec![vec!["Noir".to_owned()]]);
        assert_eq!(*validity.lock().unwrap(), vec![false]);
    }
}
