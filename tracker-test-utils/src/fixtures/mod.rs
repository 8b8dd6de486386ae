//! Database fixtures and model factories.
//!
//! - `factory` - in-memory models with standard test values
//! - `save`, `solar_system`, `star` - helpers inserting rows through the test context

pub mod factory;
pub mod save;
pub mod solar_system;
pub mod star;
