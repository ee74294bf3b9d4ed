//! Application layer for the Selection context.

pub mod custom_entry;
