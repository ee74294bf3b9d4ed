//! Domain layer for the Selection context.

pub mod slots;
pub mod store;
