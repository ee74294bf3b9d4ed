//! Storyseed — Wizard bounded context.
//!
//! Composes the feel, draw and scale grids of the setting wizard, keeps the
//! scale grid in step with the committed feels, and turns a completed wizard
//! into a settings-generation request.

pub mod application;
pub mod domain;
