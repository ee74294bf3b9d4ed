//! Domain layer for the Scale context.

pub mod level;
pub mod resolver;
pub mod rules;
