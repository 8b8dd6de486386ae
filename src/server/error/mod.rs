//! Error types for the tracker server.
//!
//! Domain errors ([`TrackerError`]), request extraction errors ([`RequestError`]) and
//! configuration errors ([`ConfigError`]) are aggregated into [`Error`]. Every type
//! implements `IntoResponse` so handlers can return `Result<_, Error>` and have
//! failures rendered as an [`ErrorDto`] JSON body.

/// Environment configuration errors
pub mod config;
pub mod request;
/// Retry classification of [`Error`]s
pub mod retry;
pub mod tracker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorDto},
    server::error::{config::ConfigError, request::RequestError, tracker::TrackerError},
};

/// Main error type for the tracker server.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts repository, service and
/// extractor errors into a single type. The `IntoResponse` implementation maps each
/// variant to its HTTP status.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Domain error: missing object, duplicate key, lost update, invalid field.
    #[error(transparent)]
    TrackerError(#[from] TrackerError),
    /// Malformed JSON body, path or query string.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Database error (query failures, connection issues, unmapped constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to bind the listen socket or serve requests.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/404/409 - For domain and request errors, with a descriptive body
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::TrackerError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                ErrorCode::InternalServerError,
                "An internal server error occurred.",
            )),
        )
            .into_response()
    }
}
