//! Shared test scaffolding for the tracker workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the schema and
//! fixture rows, then the resulting [`TestContext`] is used to run the code under
//! test against an in-memory SQLite database migrated with the real `Migrator`.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
