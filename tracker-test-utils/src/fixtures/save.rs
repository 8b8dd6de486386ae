use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn save<'a>(&'a mut self) -> SaveFixtures<'a> {
        SaveFixtures { test: self }
    }
}

pub struct SaveFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> SaveFixtures<'a> {
    /// Insert a save row built by [`factory::mock_save_model`].
    pub async fn insert_mock_save(&self, name: &str) -> Result<entity::save::Model, TestError> {
        let model = factory::mock_save_model(name);

        Ok(entity::prelude::Save::insert(model.into_active_model())
            .exec_with_returning(&self.test.db)
            .await?)
    }

    /// Insert a save with an explicit mining speed.
    pub async fn insert_mock_save_with_mining_speed(
        &self,
        name: &str,
        mining_speed: i32,
    ) -> Result<entity::save::Model, TestError> {
        let model = entity::save::Model {
            mining_speed,
            ..factory::mock_save_model(name)
        };

        Ok(entity::prelude::Save::insert(model.into_active_model())
            .exec_with_returning(&self.test.db)
            .await?)
    }
}
