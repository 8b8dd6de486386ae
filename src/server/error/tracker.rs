//! Domain errors of the tracker.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    api::{ErrorCode, ErrorDto, ObjectKind},
    field::{AllowedValues, FieldValue, FieldValues},
};

/// Business rule violations, reported to the client with a 4xx status.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// No object of the kind exists with the given keys (404)
    #[error("No {0} exists with {1}.")]
    NotFound(ObjectKind, FieldValues),
    /// A unique key is already taken (409)
    #[error("A {0} with the {1} already exists.")]
    Duplicate(ObjectKind, FieldValues),
    /// The object changed since it was read (409)
    #[error("Another transaction has already updated the {0} with {1}. Please try again.")]
    ConcurrentUpdate(ObjectKind, FieldValues),
    /// The object can't be deleted while a dependent object of the last kind references it (409)
    #[error("The {0} with {1} still has a {2}, delete it first.")]
    HasDependents(ObjectKind, FieldValues, ObjectKind),
    /// A field value is outside the allowed values (400)
    #[error("The value `{value}` for the field {name} is invalid. {1}", value = .0.format_value(), name = .0.name)]
    InvalidFieldValue(FieldValue, AllowedValues),
}

impl TrackerError {
    /// Shorthand for [`TrackerError::NotFound`].
    pub fn not_found<K: Into<FieldValues>>(object: ObjectKind, keys: K) -> Self {
        Self::NotFound(object, keys.into())
    }

    /// Shorthand for [`TrackerError::Duplicate`].
    pub fn duplicate<K: Into<FieldValues>>(object: ObjectKind, keys: K) -> Self {
        Self::Duplicate(object, keys.into())
    }

    /// Shorthand for [`TrackerError::ConcurrentUpdate`].
    pub fn concurrent_update<K: Into<FieldValues>>(object: ObjectKind, keys: K) -> Self {
        Self::ConcurrentUpdate(object, keys.into())
    }

    /// Shorthand for [`TrackerError::HasDependents`].
    pub fn has_dependents<K: Into<FieldValues>>(
        object: ObjectKind,
        keys: K,
        dependent: ObjectKind,
    ) -> Self {
        Self::HasDependents(object, keys.into(), dependent)
    }

    /// Shorthand for [`TrackerError::InvalidFieldValue`].
    pub fn invalid_field(field: FieldValue, allowed_values: AllowedValues) -> Self {
        Self::InvalidFieldValue(field, allowed_values)
    }

    /// `error_code` of the error response.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound(..) => ErrorCode::NotFound,
            Self::Duplicate(..) => ErrorCode::Duplicate,
            Self::ConcurrentUpdate(..) => ErrorCode::ConcurrentUpdate,
            Self::HasDependents(..) => ErrorCode::HasDependents,
            Self::InvalidFieldValue(..) => ErrorCode::InvalidFieldValue,
        }
    }

    /// HTTP status of the error response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(..) => StatusCode::NOT_FOUND,
            Self::Duplicate(..) | Self::ConcurrentUpdate(..) | Self::HasDependents(..) => {
                StatusCode::CONFLICT
            }
            Self::InvalidFieldValue(..) => StatusCode::BAD_REQUEST,
        }
    }

    /// Response body naming the object keys or the offending field.
    pub fn to_error_dto(&self) -> ErrorDto {
        let dto = ErrorDto::new(self.error_code(), self.to_string());

        match self {
            Self::NotFound(object, keys)
            | Self::Duplicate(object, keys)
            | Self::ConcurrentUpdate(object, keys)
            | Self::HasDependents(object, keys, _) => dto.with_object(*object, keys.0.clone()),
            Self::InvalidFieldValue(field, allowed_values) => {
                dto.with_field(field.clone(), allowed_values.clone())
            }
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (self.status_code(), Json(self.to_error_dto())).into_response()
    }
}
