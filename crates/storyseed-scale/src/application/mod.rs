//! Application layer for the Scale context.

pub mod query_handlers;
