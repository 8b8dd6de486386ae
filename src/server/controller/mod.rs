//! HTTP controller endpoints of the tracker API.
//!
//! Axum handlers for saves, solar systems and stars. Handlers extract the request,
//! delegate to the matching service and return the DTO as JSON. Every handler carries a
//! utoipa annotation that feeds the OpenAPI document served at `/api/docs`.

/// `/api/1/saves` endpoints
pub mod save;
/// Solar system endpoints, nested under their save for creation and search
pub mod solar_system;
/// Star endpoints, one star per solar system
pub mod star;
pub mod util;
