//! Service layer for business logic.
//!
//! Services validate input, run repository calls inside a transaction with retry logic
//! for transient database failures, and translate constraint violations into
//! [`TrackerError`](crate::server::error::tracker::TrackerError)s.

pub mod retry;
pub mod save;
pub mod solar_system;
pub mod star;
pub mod validation;
