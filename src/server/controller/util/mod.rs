//! Utilities for controller request handling.
//!
//! Wraps axum's extractors so that malformed requests are answered with the same
//! JSON error body as every other failure.

/// Extractors whose rejections render as [`ErrorDto`](crate::model::api::ErrorDto)
pub mod extract;
