//! Feedback cue abstraction.
//!
//! A cue is the short sound a grid plays when a choice is added. The service
//! is created once by the host application and passed by reference to every
//! store that needs it. Playing is fire-and-forget: callers log failures and
//! carry on.

use crate::error::DomainError;

/// A best-effort feedback cue.
pub trait FeedbackCue: Send + Sync {
    /// Plays the cue from the beginning.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the cue could not be played.
    /// Callers never let this affect selection state.
    fn play(&self) -> Result<(), DomainError>;
}
