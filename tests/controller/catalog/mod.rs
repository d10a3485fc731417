//! Tests for catalog controller endpoints.

mod list_entities;

use super::*;
