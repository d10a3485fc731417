//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table.
//! Each repository is generic over [`sea_orm::ConnectionTrait`] so it works against a
//! pooled connection or a transaction alike.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
