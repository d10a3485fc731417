//! Tests for favorite controller endpoints.

mod add_favorite;
mod get_favorites;
mod remove_favorite;

use super::*;
