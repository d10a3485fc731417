//! Holocron: a read-only catalog of Star Wars reference data with per-user favorites.

pub mod model;
pub mod server;
