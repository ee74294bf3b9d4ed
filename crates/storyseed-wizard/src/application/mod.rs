//! Application layer for the Wizard context.

pub mod command_handlers;
pub mod generator;
