//! Storyseed Core — shared abstractions.
//!
//! This crate defines the traits and types that the selection, scale and
//! wizard crates depend on. It contains no infrastructure code.

pub mod clock;
pub mod cue;
pub mod error;
pub mod observer;
