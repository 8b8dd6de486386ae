use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{AllowedValues, FieldValue};

/// Kind of tracked object an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    Save,
    SolarSystem,
    Star,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Save => "save",
            Self::SolarSystem => "solar system",
            Self::Star => "star",
        };

        write!(f, "{}", name)
    }
}

/// Machine readable error category, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ErrorCode {
    NotFound,
    Duplicate,
    ConcurrentUpdate,
    HasDependents,
    InvalidFieldValue,
    InvalidJson,
    UnsupportedContentType,
    PayloadTooLarge,
    InvalidUrlPath,
    InvalidQueryString,
    InternalServerError,
}

/// The response when an error occurs with an API request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Error category
    pub error_code: ErrorCode,
    /// Human readable description of the error
    pub message: String,
    /// Kind of object the error refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectKind>,
    /// Key fields of the object the error refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<FieldValue>>,
    /// The offending field and the value it held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldValue>,
    /// Values the offending field would have accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<AllowedValues>,
}

impl ErrorDto {
    pub fn new(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_code,
            message: message.into(),
            object: None,
            keys: None,
            field: None,
            allowed_values: None,
        }
    }

    pub fn with_object(mut self, object: ObjectKind, keys: Vec<FieldValue>) -> Self {
        self.object = Some(object);
        self.keys = Some(keys);
        self
    }

    pub fn with_field(mut self, field: FieldValue, allowed_values: AllowedValues) -> Self {
        self.field = Some(field);
        self.allowed_values = Some(allowed_values);
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub metadata: PageMetadata,
}

/// Position of a [`Page`] within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMetadata {
    pub total_results: u64,
    pub total_pages: u64,
    pub current_page: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, metadata: PageMetadata) -> Self {
        Self { data, metadata }
    }

    /// Convert every item of the page, keeping the metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

impl PageMetadata {
    /// Compute page metadata.
    ///
    /// # Arguments
    /// - `current_page` - 1-based page number that was requested
    /// - `size` - Page size, must be non-zero
    /// - `total_results` - Number of rows matching the search
    pub fn new(current_page: u64, size: u64, total_results: u64) -> Self {
        let total_pages = total_results.div_ceil(size.max(1));

        Self {
            total_results,
            total_pages,
            current_page,
            next_page: (current_page < total_pages).then_some(current_page + 1),
            prev_page: (current_page > 1).then(|| current_page - 1),
        }
    }
}
