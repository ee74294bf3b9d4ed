//! Domain layer for the Wizard context.

pub mod catalog;
pub mod settings;
pub mod wizard;
