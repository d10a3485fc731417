//! Service layer for business logic.
//!
//! Services coordinate between repositories and turn database models into API DTOs.
//! `catalog` serves read access to reference data, `favorite` validates and applies
//! favorite mutations.

pub mod catalog;
pub mod favorite;
