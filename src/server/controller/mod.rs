//! HTTP controller endpoints for the Holocron web API.
//!
//! Controllers extract path and body parameters, call into services, and return JSON
//! responses. Every endpoint is annotated for OpenAPI documentation via utoipa.

pub mod catalog;
pub mod favorite;
