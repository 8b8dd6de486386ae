//! Declarative test builder.
//!
//! Configuration methods only queue work; everything runs in order during
//! [`TestBuilder::build`].

use entity::sea_orm_active_enums::SpectralClass;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures refer to their parents by name so a test can describe a small
/// save/solar system/star hierarchy without handling ids.
#[derive(Default)]
pub struct TestBuilder {
    include_migrations: bool,

    saves: Vec<String>,
    solar_systems: Vec<(String, String)>, // (save_name, name)
    stars: Vec<(String, String, SpectralClass)>, // (save_name, solar_system_name, class)
}

impl TestBuilder {
    /// Create a new TestBuilder with no schema and no fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the workspace migrations against the test database.
    ///
    /// Implied by any `with_*` fixture method.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.include_migrations = true;
        self
    }

    /// Insert a save with the given name and default test values.
    ///
    /// # Arguments
    /// - `name` - Unique save name, used by later fixtures to reference it
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_save(mut self, name: impl Into<String>) -> Self {
        self.saves.push(name.into());
        self
    }

    /// Insert a solar system owned by a previously queued save.
    ///
    /// # Arguments
    /// - `save_name` - Name passed to an earlier `with_save`
    /// - `name` - Solar system name, unique within the save
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_solar_system(
        mut self,
        save_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.solar_systems.push((save_name.into(), name.into()));
        self
    }

    /// Insert a star into a previously queued solar system.
    ///
    /// # Arguments
    /// - `save_name` - Save owning the solar system
    /// - `solar_system_name` - Name passed to an earlier `with_solar_system`
    /// - `spectral_class` - Class of the inserted star
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_star(
        mut self,
        save_name: impl Into<String>,
        solar_system_name: impl Into<String>,
        spectral_class: SpectralClass,
    ) -> Self {
        self.stars
            .push((save_name.into(), solar_system_name.into(), spectral_class));
        self
    }

    /// Build the test context.
    ///
    /// Executes the queued operations in order:
    /// 1. Runs migrations (when requested or when any fixture is queued)
    /// 2. Inserts saves, then solar systems, then stars
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Migration or fixture insertion failed
    /// - `Err(TestError::MissingFixture)` - A fixture referenced a parent that was never queued
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let has_fixtures =
            !self.saves.is_empty() || !self.solar_systems.is_empty() || !self.stars.is_empty();

        if self.include_migrations || has_fixtures {
            test.run_migrations().await?;
        }

        for name in self.saves {
            let save = test.save().insert_mock_save(&name).await?;
            test.saves.push(save);
        }

        for (save_name, name) in self.solar_systems {
            let save_id = test.find_save(&save_name)?.id;
            let system = test
                .solar_system()
                .insert_mock_solar_system(save_id, &name)
                .await?;
            test.solar_systems.push(system);
        }

        for (save_name, system_name, spectral_class) in self.stars {
            let solar_system_id = test.find_solar_system(&save_name, &system_name)?.id;
            let star = test
                .star()
                .insert_mock_star_with_class(solar_system_id, spectral_class)
                .await?;
            test.stars.push(star);
        }

        Ok(test)
    }
}
