//! Storyseed — HTTP API library.
//!
//! Exposes the router, state, configuration and error types so the binary
//! and the integration tests build the same application.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
