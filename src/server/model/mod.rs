//! Server-side models: shared application state and paging requests.

/// Shared handler state
pub mod app;
pub mod page;
