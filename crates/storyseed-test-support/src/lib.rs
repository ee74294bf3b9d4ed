//! Shared test mocks and utilities for the Storyseed setting wizard.

mod clock;
mod cue;
mod observer;

pub use clock::ManualClock;
pub use cue::{FailingCue, RecordingCue};
pub use observer::RecordingObserver;
