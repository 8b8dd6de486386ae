//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with hand-built extractors and the returned value is
//! converted into a response to check the status code.

mod save;
mod solar_system;
mod star;
