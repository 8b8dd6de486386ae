//! Errors raised while extracting a request, before any handler code runs.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorCode, ErrorDto};

/// A rejection from one of axum's extractors.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The body is not JSON, not the expected shape, too large or sent without a JSON content type
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),
    /// A path segment doesn't parse, e.g. a malformed UUID
    #[error("Invalid URL path: {0}")]
    InvalidUrlPath(#[from] PathRejection),
    /// The query string can't be decoded
    #[error("Invalid query string: {0}")]
    InvalidQueryString(#[from] QueryRejection),
}

impl RequestError {
    /// HTTP status of the error response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Keeps axum's distinction between syntax errors (400), schema mismatches
            // (422), an oversized body (413) and a missing content type (415).
            Self::InvalidJson(rejection) => rejection.status(),
            Self::InvalidUrlPath(_) => StatusCode::NOT_FOUND,
            Self::InvalidQueryString(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// `error_code` of the error response.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidJson(JsonRejection::MissingJsonContentType(_)) => {
                ErrorCode::UnsupportedContentType
            }
            Self::InvalidJson(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                ErrorCode::PayloadTooLarge
            }
            Self::InvalidJson(_) => ErrorCode::InvalidJson,
            Self::InvalidUrlPath(_) => ErrorCode::InvalidUrlPath,
            Self::InvalidQueryString(_) => ErrorCode::InvalidQueryString,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let body = match &self {
            Self::InvalidJson(rejection) => rejection.body_text(),
            Self::InvalidUrlPath(rejection) => rejection.body_text(),
            Self::InvalidQueryString(rejection) => rejection.body_text(),
        };

        (
            self.status_code(),
            Json(ErrorDto::new(self.error_code(), body)),
        )
            .into_response()
    }
}
