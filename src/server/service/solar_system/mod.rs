//! Solar system service layer.
//!
//! Solar systems always belong to a save. Creating one under a save that doesn't exist
//! and deleting one that still has a star are both reported as domain errors rather
//! than database failures.


use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    model::{
        api::{ObjectKind, Page, PageMetadata},
        field::FieldValue,
        solar_system::{CreateSolarSystemDto, SolarSystemDto, UpdateSolarSystemDto},
    },
    server::{
        data::{
            save::SaveRepository,
            solar_system::{SolarSystemRepository, SolarSystemSortField},
        },
        error::{tracker::TrackerError, Error},
        model::page::PageRequest,
        service::{retry::RetryContext, validation},
    },
};

/// Service for the solar systems of a save.
pub struct SolarSystemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SolarSystemService<'a> {
    /// Creates a new instance of SolarSystemService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a solar system in the save `save_id`.
    ///
    /// # Returns
    /// - `Ok(SolarSystemDto)` - The created solar system at version 0
    /// - `Err(Error::TrackerError)` - `NotFound` for an unknown save, `Duplicate` if the
    ///   save already has a solar system with this name, `InvalidFieldValue` for a blank name
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_solar_system(
        &self,
        save_id: Uuid,
        dto: CreateSolarSystemDto,
    ) -> Result<SolarSystemDto, Error> {
        validation::name("name", &dto.name)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("create solar system `{}` in save ID {}", dto.name, save_id),
            || {
                let db = db.clone();
                let dto = dto.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let solar_system = SolarSystemRepository::new(&txn)
                        .create(save_id, dto.name.clone(), dto.notes)
                        .await
                        .map_err(|e| map_write_err(e, save_id, &dto.name))?;
                    txn.commit().await?;

                    Ok(SolarSystemDto::from(solar_system))
                })
            },
        )
        .instrument(tracing::info_span!("create_solar_system", save_id = %save_id))
        .await
    }

    /// Retrieves a solar system by ID, `NotFound` if there is none.
    pub async fn get_solar_system(&self, id: Uuid) -> Result<SolarSystemDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get solar system ID {}", id), || {
            let db = db.clone();

            Box::pin(async move {
                let solar_system = SolarSystemRepository::new(&db)
                    .get_by_id(id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                Ok(SolarSystemDto::from(solar_system))
            })
        })
        .instrument(tracing::info_span!("get_solar_system", solar_system_id = %id))
        .await
    }

    /// Returns one page of the solar systems of a save.
    ///
    /// # Arguments
    /// - `save_id` - Save to search in
    /// - `name` - Optional case-insensitive prefix of any word of the name
    /// - `page` - Page, size and sort order
    ///
    /// # Returns
    /// - `Ok(Page<SolarSystemDto>)` - The requested page, possibly empty
    /// - `Err(Error::TrackerError)` - `NotFound` if the save doesn't exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn search_solar_systems(
        &self,
        save_id: Uuid,
        name: Option<String>,
        page: PageRequest<SolarSystemSortField>,
    ) -> Result<Page<SolarSystemDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("search solar systems of save ID {}", save_id), || {
            let db = db.clone();
            let name = name.clone();
            let page = page.clone();

            Box::pin(async move {
                if SaveRepository::new(&db).get_by_id(save_id).await?.is_none() {
                    return Err(Error::from(TrackerError::not_found(
                        ObjectKind::Save,
                        FieldValue::new("id", save_id),
                    )));
                }

                let (solar_systems, total_results) = SolarSystemRepository::new(&db)
                    .search(save_id, name.as_deref(), &page)
                    .await?;
                let metadata = PageMetadata::new(page.page, page.size, total_results);

                Ok(Page::new(solar_systems, metadata).map(SolarSystemDto::from))
            })
        })
        .instrument(tracing::info_span!("search_solar_systems", save_id = %save_id))
        .await
    }

    /// Applies a partial update to a solar system.
    ///
    /// The owning save can't be changed. When `dto.version` is given it must match the
    /// stored version.
    pub async fn update_solar_system(
        &self,
        id: Uuid,
        dto: UpdateSolarSystemDto,
    ) -> Result<SolarSystemDto, Error> {
        if let Some(name) = &dto.name {
            validation::name("name", name)?;
        }

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update solar system ID {}", id), || {
            let db = db.clone();
            let dto = dto.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let solar_system_repo = SolarSystemRepository::new(&txn);

                let solar_system = solar_system_repo
                    .get_by_id(id)
                    .await?
                    .ok_or_else(|| not_found(id))?;
                if dto
                    .version
                    .is_some_and(|version| version != solar_system.version)
                {
                    return Err(Error::from(concurrent_update(id)));
                }

                let patched = entity::solar_system::Model {
                    name: dto.name.unwrap_or(solar_system.name),
                    notes: dto.notes.unwrap_or(solar_system.notes),
                    ..solar_system
                };
                let (save_id, name) = (patched.save_id, patched.name.clone());

                let updated = solar_system_repo
                    .update(patched)
                    .await
                    .map_err(|e| map_write_err(e, save_id, &name))?
                    .ok_or_else(|| concurrent_update(id))?;
                txn.commit().await?;

                Ok(SolarSystemDto::from(updated))
            })
        })
        .instrument(tracing::info_span!("update_solar_system", solar_system_id = %id))
        .await
    }

    /// Deletes a solar system.
    ///
    /// # Returns
    /// - `Ok(())` - The solar system was deleted
    /// - `Err(Error::TrackerError)` - `NotFound` if it doesn't exist, `HasDependents`
    ///   while it still has a star
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_solar_system(&self, id: Uuid) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete solar system ID {}", id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let result = SolarSystemRepository::new(&txn)
                    .delete(id)
                    .await
                    .map_err(|e| match e.sql_err() {
                        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                            TrackerError::has_dependents(
                                ObjectKind::SolarSystem,
                                FieldValue::new("id", id),
                                ObjectKind::Star,
                            )
                            .into()
                        }
                        _ => Error::from(e),
                    })?;
                txn.commit().await?;

                if result.rows_affected == 0 {
                    return Err(Error::from(not_found(id)));
                }

                Ok(())
            })
        })
        .instrument(tracing::info_span!("delete_solar_system", solar_system_id = %id))
        .await
    }
}

fn not_found(id: Uuid) -> TrackerError {
    TrackerError::not_found(ObjectKind::SolarSystem, FieldValue::new("id", id))
}

fn concurrent_update(id: Uuid) -> TrackerError {
    TrackerError::concurrent_update(ObjectKind::SolarSystem, FieldValue::new("id", id))
}

/// Maps the unique `(save_id, name)` key and the save foreign key.
fn map_write_err(err: DbErr, save_id: Uuid, name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TrackerError::duplicate(
            ObjectKind::SolarSystem,
            [
                FieldValue::new("save_id", save_id),
                FieldValue::new("name", name),
            ],
        )
        .into(),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            TrackerError::not_found(ObjectKind::Save, FieldValue::new("id", save_id)).into()
        }
        _ => err.into(),
    }
}
