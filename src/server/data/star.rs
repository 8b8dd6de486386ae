//! Star persistence.

use chrono::Utc;
use entity::sea_orm_active_enums::SpectralClass;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, QueryFilter,
};
use uuid::Uuid;

/// Queries on the `stars` table.
pub struct StarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarRepository<'a, C> {
    /// Creates a new instance of [`StarRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the star of solar system `solar_system_id`
    ///
    /// # Arguments
    /// - `solar_system_id` - Solar system the star belongs to, must not have a star yet
    /// - `spectral_class` - Classification of the star
    /// - `luminosity` - Must be greater than 0
    /// - `radius` - Must be greater than 0
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted star at version 0
    /// - `Err(DbErr)` - Unique violation if the solar system already has a star, foreign
    ///   key violation if it doesn't exist, check violation for non-positive values
    pub async fn create(
        &self,
        solar_system_id: Uuid,
        spectral_class: SpectralClass,
        luminosity: f32,
        radius: f32,
    ) -> Result<entity::star::Model, DbErr> {
        let star = entity::star::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            solar_system_id: ActiveValue::Set(solar_system_id),
            spectral_class: ActiveValue::Set(spectral_class),
            luminosity: ActiveValue::Set(luminosity),
            radius: ActiveValue::Set(radius),
        };

        star.insert(self.db).await
    }

    /// Finds a star by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::star::Model>, DbErr> {
        entity::prelude::Star::find_by_id(id).one(self.db).await
    }

    /// Finds the star of a solar system, there is at most one
    pub async fn get_by_solar_system_id(
        &self,
        solar_system_id: Uuid,
    ) -> Result<Option<entity::star::Model>, DbErr> {
        entity::prelude::Star::find()
            .filter(entity::star::Column::SolarSystemId.eq(solar_system_id))
            .one(self.db)
            .await
    }

    /// Writes class, luminosity and radius if the version of `star` is still current
    ///
    /// Returns `Ok(None)` when no row matched the id and version.
    pub async fn update(
        &self,
        star: entity::star::Model,
    ) -> Result<Option<entity::star::Model>, DbErr> {
        let result = entity::prelude::Star::update_many()
            .col_expr(entity::star::Column::UpdatedAt, Expr::value(Utc::now()))
            .col_expr(
                entity::star::Column::Version,
                Expr::col(entity::star::Column::Version).add(1),
            )
            .set(entity::star::ActiveModel {
                spectral_class: ActiveValue::Set(star.spectral_class),
                luminosity: ActiveValue::Set(star.luminosity),
                radius: ActiveValue::Set(star.radius),
                ..Default::default()
            })
            .filter(entity::star::Column::Id.eq(star.id))
            .filter(entity::star::Column::Version.eq(star.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(star.id).await
    }

    /// Deletes a star, check [`DeleteResult::rows_affected`] to see whether it existed
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Star::delete_by_id(id).exec(self.db).await
    }
}
