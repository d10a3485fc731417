//! Server application core modules.
//!
//! This module contains all server-side functionality for Holocron: HTTP routing,
//! configuration, database access, and the catalog and favorites services.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
