//! Star service layer.
//!
//! A solar system has at most one star, so stars are created and looked up through
//! their solar system as well as by their own ID.


use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    model::{
        api::ObjectKind,
        field::FieldValue,
        star::{CreateStarDto, StarDto, UpdateStarDto},
    },
    server::{
        data::star::StarRepository,
        error::{tracker::TrackerError, Error},
        service::{retry::RetryContext, validation},
    },
};

/// Service for stars.
pub struct StarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarService<'a> {
    /// Creates a new instance of StarService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the star of solar system `solar_system_id`.
    ///
    /// # Returns
    /// - `Ok(StarDto)` - The created star at version 0
    /// - `Err(Error::TrackerError)` - `NotFound` for an unknown solar system, `Duplicate`
    ///   if it already has a star, `InvalidFieldValue` for a non-positive luminosity or radius
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_star(
        &self,
        solar_system_id: Uuid,
        dto: CreateStarDto,
    ) -> Result<StarDto, Error> {
        validation::positive("luminosity", dto.luminosity)?;
        validation::positive("radius", dto.radius)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("create star of solar system ID {}", solar_system_id),
            || {
                let db = db.clone();
                let dto = dto.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let star = StarRepository::new(&txn)
                        .create(solar_system_id, dto.spectral_class, dto.luminosity, dto.radius)
                        .await
                        .map_err(|e| map_write_err(e, solar_system_id))?;
                    txn.commit().await?;

                    Ok(StarDto::from(star))
                })
            },
        )
        .instrument(tracing::info_span!("create_star", solar_system_id = %solar_system_id))
        .await
    }

    /// Retrieves a star by its own ID.
    pub async fn get_star(&self, id: Uuid) -> Result<StarDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get star ID {}", id), || {
            let db = db.clone();

            Box::pin(async move {
                let star = StarRepository::new(&db)
                    .get_by_id(id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                Ok(StarDto::from(star))
            })
        })
        .instrument(tracing::info_span!("get_star", star_id = %id))
        .await
    }

    /// Retrieves the star of a solar system.
    ///
    /// # Returns
    /// - `Ok(StarDto)` - The star
    /// - `Err(Error::TrackerError)` - `NotFound` keyed by `solar_system_id` when the solar
    ///   system has no star or doesn't exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_star_of_solar_system(&self, solar_system_id: Uuid) -> Result<StarDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("get star of solar system ID {}", solar_system_id),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let star = StarRepository::new(&db)
                        .get_by_solar_system_id(solar_system_id)
                        .await?
                        .ok_or_else(|| {
                            TrackerError::not_found(
                                ObjectKind::Star,
                                FieldValue::new("solar_system_id", solar_system_id),
                            )
                        })?;

                    Ok(StarDto::from(star))
                })
            },
        )
        .instrument(tracing::info_span!("get_star_of_solar_system", solar_system_id = %solar_system_id))
        .await
    }

    /// Applies a partial update to a star.
    ///
    /// A star can't be moved to another solar system. When `dto.version` is given it must
    /// match the stored version.
    pub async fn update_star(&self, id: Uuid, dto: UpdateStarDto) -> Result<StarDto, Error> {
        if let Some(luminosity) = dto.luminosity {
            validation::positive("luminosity", luminosity)?;
        }
        if let Some(radius) = dto.radius {
            validation::positive("radius", radius)?;
        }

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update star ID {}", id), || {
            let db = db.clone();
            let dto = dto.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let star_repo = StarRepository::new(&txn);

                let star = star_repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
                if dto.version.is_some_and(|version| version != star.version) {
                    return Err(Error::from(concurrent_update(id)));
                }

                let patched = entity::star::Model {
                    spectral_class: dto.spectral_class.unwrap_or(star.spectral_class),
                    luminosity: dto.luminosity.unwrap_or(star.luminosity),
                    radius: dto.radius.unwrap_or(star.radius),
                    ..star
                };

                let updated = star_repo
                    .update(patched)
                    .await?
                    .ok_or_else(|| concurrent_update(id))?;
                txn.commit().await?;

                Ok(StarDto::from(updated))
            })
        })
        .instrument(tracing::info_span!("update_star", star_id = %id))
        .await
    }

    /// Deletes a star, leaving its solar system in place.
    pub async fn delete_star(&self, id: Uuid) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete star ID {}", id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let result = StarRepository::new(&txn).delete(id).await?;
                txn.commit().await?;

                if result.rows_affected == 0 {
                    return Err(Error::from(not_found(id)));
                }

                Ok(())
            })
        })
        .instrument(tracing::info_span!("delete_star", star_id = %id))
        .await
    }
}

fn not_found(id: Uuid) -> TrackerError {
    TrackerError::not_found(ObjectKind::Star, FieldValue::new("id", id))
}

fn concurrent_update(id: Uuid) -> TrackerError {
    TrackerError::concurrent_update(ObjectKind::Star, FieldValue::new("id", id))
}

/// Maps the one-star-per-system key and the solar system foreign key.
fn map_write_err(err: DbErr, solar_system_id: Uuid) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TrackerError::duplicate(
            ObjectKind::Star,
            FieldValue::new("solar_system_id", solar_system_id),
        )
        .into(),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => TrackerError::not_found(
            ObjectKind::SolarSystem,
            FieldValue::new("id", solar_system_id),
        )
        .into(),
        _ => err.into(),
    }
}
