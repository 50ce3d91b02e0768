//! Storage access for countries and seasons.
//!
//! All SQL lives here; nothing outside the repositories issues raw
//! queries. The store traits expose the subset the sync routines need,
//! dyn-compatible so tests can substitute in-memory implementations.

use std::future::Future;
use std::pin::Pin;

pub mod countries;
pub mod seasons;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
