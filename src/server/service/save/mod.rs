//! Save service layer.
//!
//! Validates incoming save data, runs every write in its own transaction and maps
//! constraint violations reported by the database to [`TrackerError`]s.


use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    model::{
        api::{ObjectKind, Page, PageMetadata},
        field::FieldValue,
        save::{CreateSaveDto, SaveDto, UpdateSaveDto},
    },
    server::{
        data::save::{SaveRepository, SaveSortField},
        error::{tracker::TrackerError, Error},
        model::page::PageRequest,
        service::{retry::RetryContext, validation},
    },
};

/// Service for creating, reading, updating and deleting saves.
pub struct SaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaveService<'a> {
    /// Creates a new instance of SaveService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `SaveService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new save.
    ///
    /// # Arguments
    /// - `dto` - Name, notes and mining speed of the new save
    ///
    /// # Returns
    /// - `Ok(SaveDto)` - The created save at version 0
    /// - `Err(Error::TrackerError)` - Blank name, mining speed below 100 or name already taken
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_save(&self, dto: CreateSaveDto) -> Result<SaveDto, Error> {
        validation::name("name", &dto.name)?;
        validation::mining_speed(dto.mining_speed)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("create save `{}`", dto.name), || {
            let db = db.clone();
            let dto = dto.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let save = SaveRepository::new(&txn)
                    .create(dto.name.clone(), dto.notes, dto.mining_speed)
                    .await
                    .map_err(|e| map_write_err(e, &dto.name))?;
                txn.commit().await?;

                Ok(SaveDto::from(save))
            })
        })
        .instrument(tracing::info_span!("create_save"))
        .await
    }

    /// Retrieves a save by ID.
    ///
    /// # Returns
    /// - `Ok(SaveDto)` - The save
    /// - `Err(Error::TrackerError)` - `NotFound` if no save has this ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_save(&self, id: Uuid) -> Result<SaveDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get save ID {}", id), || {
            let db = db.clone();

            Box::pin(async move {
                let save = SaveRepository::new(&db)
                    .get_by_id(id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                Ok(SaveDto::from(save))
            })
        })
        .instrument(tracing::info_span!("get_save", save_id = %id))
        .await
    }

    /// Returns one page of saves in the requested order.
    pub async fn search_saves(
        &self,
        page: PageRequest<SaveSortField>,
    ) -> Result<Page<SaveDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("search saves", || {
            let db = db.clone();
            let page = page.clone();

            Box::pin(async move {
                let (saves, total_results) = SaveRepository::new(&db).search(&page).await?;

                let metadata = PageMetadata::new(page.page, page.size, total_results);

                Ok(Page::new(saves, metadata).map(SaveDto::from))
            })
        })
        .instrument(tracing::info_span!("search_saves"))
        .await
    }

    /// Applies a partial update to a save.
    ///
    /// Absent fields are kept, `notes: null` clears the notes. When `dto.version` is
    /// given it must match the stored version.
    ///
    /// # Returns
    /// - `Ok(SaveDto)` - The updated save with its version incremented
    /// - `Err(Error::TrackerError)` - `NotFound`, `Duplicate` name, `ConcurrentUpdate`
    ///   when the version doesn't match, or `InvalidFieldValue`
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update_save(&self, id: Uuid, dto: UpdateSaveDto) -> Result<SaveDto, Error> {
        if let Some(name) = &dto.name {
            validation::name("name", name)?;
        }
        if let Some(mining_speed) = dto.mining_speed {
            validation::mining_speed(mining_speed)?;
        }

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update save ID {}", id), || {
            let db = db.clone();
            let dto = dto.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let save_repo = SaveRepository::new(&txn);

                let save = save_repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
                if dto.version.is_some_and(|version| version != save.version) {
                    return Err(Error::from(concurrent_update(id)));
                }

                let patched = entity::save::Model {
                    name: dto.name.unwrap_or(save.name),
                    notes: dto.notes.unwrap_or(save.notes),
                    mining_speed: dto.mining_speed.unwrap_or(save.mining_speed),
                    ..save
                };
                let name = patched.name.clone();

                let updated = save_repo
                    .update(patched)
                    .await
                    .map_err(|e| map_write_err(e, &name))?
                    .ok_or_else(|| concurrent_update(id))?;
                txn.commit().await?;

                Ok(SaveDto::from(updated))
            })
        })
        .instrument(tracing::info_span!("update_save", save_id = %id))
        .await
    }

    /// Deletes a save together with all of its solar systems.
    ///
    /// # Returns
    /// - `Ok(())` - The save was deleted
    /// - `Err(Error::TrackerError)` - `NotFound` if no save has this ID, `HasDependents`
    ///   if one of its solar systems still has a star
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_save(&self, id: Uuid) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete save ID {}", id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let result = SaveRepository::new(&txn)
                    .delete(id)
                    .await
                    .map_err(|e| match e.sql_err() {
                        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                            TrackerError::has_dependents(
                                ObjectKind::Save,
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
        .instrument(tracing::info_span!("delete_save", save_id = %id))
        .await
    }
}

fn not_found(id: Uuid) -> TrackerError {
    TrackerError::not_found(ObjectKind::Save, FieldValue::new("id", id))
}

fn concurrent_update(id: Uuid) -> TrackerError {
    TrackerError::concurrent_update(ObjectKind::Save, FieldValue::new("id", id))
}

/// Unique violations on insert or update can only come from the save name.
fn map_write_err(err: DbErr, name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            TrackerError::duplicate(ObjectKind::Save, FieldValue::new("name", name)).into()
        }
        _ => err.into(),
    }
}
