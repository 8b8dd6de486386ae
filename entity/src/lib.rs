//! Database entities for the tracker schema.
//!
//! One module per table plus the shared active enums. The layout mirrors what
//! `sea-orm-cli generate entity` produces so regenerating against a migrated
//! database yields a minimal diff.

pub mod prelude;

pub mod save;
pub mod sea_orm_active_enums;
pub mod solar_system;
pub mod star;
