//! Test cues — mock `FeedbackCue` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use storyseed_core::cue::FeedbackCue;
use storyseed_core::error::DomainError;

/// A cue that counts how many times it was played.
#[derive(Debug, Default)]
pub struct RecordingCue {
    plays: AtomicUsize,
}

impl RecordingCue {
    /// Create a cue with a zero play count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of `play` calls so far.
    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }
}

impl FeedbackCue for RecordingCue {
    fn play(&self) -> Result<(), DomainError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A cue whose playback always fails, as a blocked autoplay would.
#[derive(Debug)]
pub struct FailingCue;

impl FeedbackCue for FailingCue {
    fn play(&self) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("playback blocked".into()))
    }
}
