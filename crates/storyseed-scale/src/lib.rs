//! Storyseed — Scale bounded context.
//!
//! Derives the narrative scale choices offered to the user from the feels
//! they picked, by merging generic defaults with feel-specific rules.

pub mod application;
pub mod domain;
