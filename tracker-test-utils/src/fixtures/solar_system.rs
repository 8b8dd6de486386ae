use sea_orm::{EntityTrait, IntoActiveModel};
use uuid::Uuid;

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn solar_system<'a>(&'a mut self) -> SolarSystemFixtures<'a> {
        SolarSystemFixtures { test: self }
    }
}

pub struct SolarSystemFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> SolarSystemFixtures<'a> {
    /// Insert a solar system row owned by `save_id`.
    pub async fn insert_mock_solar_system(
        &self,
        save_id: Uuid,
        name: &str,
    ) -> Result<entity::solar_system::Model, TestError> {
        let model = factory::mock_solar_system_model(save_id, name);

        Ok(
            entity::prelude::SolarSystem::insert(model.into_active_model())
                .exec_with_returning(&self.test.db)
                .await?,
        )
    }
}
