//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns
//! an in-memory SQLite database and keeps every fixture row inserted during the build
//! so tests can refer to them by id.

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_save("Alpha")
///     .with_solar_system("Alpha", "Sol")
///     .build()
///     .await?;
///
/// let save = &test.saves[0];
/// test.star().insert_mock_star(test.solar_systems[0].id).await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Saves inserted by the builder, in insertion order
    pub saves: Vec<entity::save::Model>,
    /// Solar systems inserted by the builder, in insertion order
    pub solar_systems: Vec<entity::solar_system::Model>,
    /// Stars inserted by the builder, in insertion order
    pub stars: Vec<entity::star::Model>,
}

impl TestContext {
    /// Convert the database connection into any type that can be built from it.
    ///
    /// Lets integration tests produce the server's `AppState` without this crate
    /// depending on the server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context around a fresh in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty, unmigrated database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            saves: Vec::new(),
            solar_systems: Vec::new(),
            stars: Vec::new(),
        })
    }

    /// Apply every pending migration to the test database.
    ///
    /// # Returns
    /// - `Ok(())` - Schema is up to date
    /// - `Err(TestError::DbErr)` - A migration failed
    pub(crate) async fn run_migrations(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }

    pub fn find_save(&self, name: &str) -> Result<&entity::save::Model, TestError> {
        self.saves
            .iter()
            .find(|save| save.name == name)
            .ok_or_else(|| TestError::MissingFixture(format!("save `{}`", name)))
    }

    pub fn find_solar_system(
        &self,
        save_name: &str,
        name: &str,
    ) -> Result<&entity::solar_system::Model, TestError> {
        let save_id = self.find_save(save_name)?.id;

        self.solar_systems
            .iter()
            .find(|system| system.save_id == save_id && system.name == name)
            .ok_or_else(|| {
                TestError::MissingFixture(format!("solar system `{}` in save `{}`", name, save_name))
            })
    }
}
