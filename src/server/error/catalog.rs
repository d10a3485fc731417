//! Not-found errors for catalog lookups.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::catalog::EntityKind};

/// Lookup failures for catalog records and favorites.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No row of the given kind matched, returned to clients as 404
    #[error("{0} not found")]
    NotFound(EntityKind),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(kind) => {
                tracing::debug!(kind = %kind, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
