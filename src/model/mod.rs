//! Request and response types shared by the HTTP API.
//!
//! These are the JSON shapes clients see. Server internals convert database
//! models into these types at the controller/service boundary.

pub mod api;
pub mod field;
pub mod save;
pub mod solar_system;
pub mod star;
pub mod util;
