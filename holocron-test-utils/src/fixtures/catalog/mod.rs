//! Catalog fixture utilities.
//!
//! This module provides methods for inserting reference data and favorites into the test
//! database, plus factory functions for in-memory model instances.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    /// Access catalog fixture helpers for this test context.
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

/// Fixture helpers for catalog tables.
pub struct CatalogFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}
