//! Error types for the Holocron server application.
//!
//! This module provides the error handling system with specialized error types for
//! configuration and catalog lookups. All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for `Display` and `Error` implementations.

pub mod catalog;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError},
};

/// Main error type for the Holocron server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type. `#[from]` conversions let every layer propagate with `?`, and the `IntoResponse`
/// implementation maps each error to an HTTP response.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Catalog errors (referenced user, entity, or favorite does not exist)
/// - Database errors (query failures, connection issues, constraint violations)
/// - I/O errors (binding the HTTP listener)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog error (lookup by ID or by favorite target found nothing).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// I/O error (socket binding, serving).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a unique or foreign key violation raised by the database.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::DbErr(err) => matches!(
                err.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
                    | Some(SqlErr::ForeignKeyConstraintViolation(_))
            ),
            _ => false,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing users, reference entities, or favorites
/// - 409 Conflict - For inserts rejected by a unique or foreign key constraint
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::CatalogError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err if err.is_constraint_violation() => {
                tracing::warn!("Constraint violation: {}", err);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Request conflicts with existing data".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
