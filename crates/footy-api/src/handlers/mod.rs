//! Request handlers for the `/v1` HTTP surface.

pub mod countries;
pub mod health;
pub mod seasons;
