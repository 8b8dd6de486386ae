use entity::sea_orm_active_enums::SpectralClass;
use sea_orm::{EntityTrait, IntoActiveModel};
use uuid::Uuid;

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn star<'a>(&'a mut self) -> StarFixtures<'a> {
        StarFixtures { test: self }
    }
}

pub struct StarFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> StarFixtures<'a> {
    /// Insert a class G star into `solar_system_id`.
    pub async fn insert_mock_star(
        &self,
        solar_system_id: Uuid,
    ) -> Result<entity::star::Model, TestError> {
        self.insert_mock_star_with_class(solar_system_id, SpectralClass::ClassG)
            .await
    }

    pub async fn insert_mock_star_with_class(
        &self,
        solar_system_id: Uuid,
        spectral_class: SpectralClass,
    ) -> Result<entity::star::Model, TestError> {
        let model = factory::mock_star_model(solar_system_id, spectral_class);

        Ok(entity::prelude::Star::insert(model.into_active_model())
            .exec_with_returning(&self.test.db)
            .await?)
    }
}
