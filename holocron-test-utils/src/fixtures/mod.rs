//! Test fixture modules for database record creation.
//!
//! - `catalog` - Users, characters, planets, vehicles, and favorites

pub mod catalog;
