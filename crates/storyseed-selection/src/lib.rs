//! Storyseed — Selection bounded context.
//!
//! Responsible for bounded, toggleable choice grids and the free-text custom
//! entries layered on top of them.

pub mod application;
pub mod domain;
