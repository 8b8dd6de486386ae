//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for one table each. They are generic over
//! `ConnectionTrait` so services can run several calls inside one transaction, and
//! they return raw `DbErr`s; translating constraint violations into domain errors
//! is left to the service layer.

pub mod save;
pub mod solar_system;
pub mod star;
