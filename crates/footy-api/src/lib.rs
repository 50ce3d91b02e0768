//! footy sports-data API library.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod config;
pub mod db;
/// HTTP error envelope and taxonomy.
pub mod error;
pub mod handlers;
pub mod models;
/// Pagination math and the page-bounded response envelope.
pub mod pagination;
/// Dynamic WHERE-clause composition for list queries.
pub mod query;
pub mod repo;
pub mod router;
/// Insert-missing reconciliation against the API-Sports canonical sets.
pub mod sync;
pub mod validate;
