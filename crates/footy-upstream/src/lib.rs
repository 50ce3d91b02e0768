//! API-Sports client adapter.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// Client trait and `reqwest`-backed implementation.
pub mod client;
/// Typed adapter errors.
pub mod error;
/// API-Sports response payloads.
pub mod models;
