//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases, and the
//! entity/target kinds shared by the data, service, and controller layers.

pub mod app;
pub mod catalog;
pub mod db;
