//! Data transfer objects returned by and accepted from the HTTP API.

pub mod api;
pub mod catalog;
pub mod favorite;
