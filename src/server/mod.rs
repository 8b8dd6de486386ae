//! Server application core modules.
//!
//! This module contains the HTTP side of the tracker: configuration, routing, request
//! handlers, business rules and database access for saves, solar systems and stars.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
/// Database connection and router assembly used by `main`
pub mod startup;
