//! Save persistence.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::model::page::{PageRequest, SortField};

/// Fields a save search can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveSortField {
    /// `id`
    Id,
    /// `created_at`, the default
    #[default]
    CreatedAt,
    /// `name`
    Name,
    /// `notes`
    Notes,
    /// `mining_speed`
    MiningSpeed,
}

impl SaveSortField {
    /// Column of the `saves` table this field sorts by.
    pub fn column(&self) -> entity::save::Column {
        match self {
            Self::Id => entity::save::Column::Id,
            Self::CreatedAt => entity::save::Column::CreatedAt,
            Self::Name => entity::save::Column::Name,
            Self::Notes => entity::save::Column::Notes,
            Self::MiningSpeed => entity::save::Column::MiningSpeed,
        }
    }

    /// Add this field to the `ORDER BY` clause of `query`.
    pub fn apply<Q: QueryOrder>(&self, query: Q, order: Order) -> Q {
        query.order_by(self.column(), order)
    }
}

impl SortField for SaveSortField {
    fn name(&self) -> String {
        match self {
            Self::Id => "id",
            Self::CreatedAt => "created_at",
            Self::Name => "name",
            Self::Notes => "notes",
            Self::MiningSpeed => "mining_speed",
        }
        .to_string()
    }

    fn values() -> Vec<Self> {
        vec![
            Self::Id,
            Self::CreatedAt,
            Self::Name,
            Self::Notes,
            Self::MiningSpeed,
        ]
    }
}

/// Queries on the `saves` table, usable with a connection or a transaction.
pub struct SaveRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SaveRepository<'a, C> {
    /// Creates a new instance of [`SaveRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new save at version 0
    pub async fn create(
        &self,
        name: String,
        notes: Option<String>,
        mining_speed: i32,
    ) -> Result<entity::save::Model, DbErr> {
        let save = entity::save::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            name: ActiveValue::Set(name),
            notes: ActiveValue::Set(notes),
            mining_speed: ActiveValue::Set(mining_speed),
        };

        save.insert(self.db).await
    }

    /// Finds a save by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::save::Model>, DbErr> {
        entity::prelude::Save::find_by_id(id).one(self.db).await
    }

    /// Writes the mutable fields of `save` if its version is still current
    ///
    /// The row is matched on both `id` and `version`; on success the version is
    /// incremented and `updated_at` set. Returns `Ok(None)` when no row matched,
    /// meaning the save was changed or deleted since `save` was read.
    pub async fn update(
        &self,
        save: entity::save::Model,
    ) -> Result<Option<entity::save::Model>, DbErr> {
        let result = entity::prelude::Save::update_many()
            .col_expr(entity::save::Column::UpdatedAt, Expr::value(Utc::now()))
            .col_expr(
                entity::save::Column::Version,
                Expr::col(entity::save::Column::Version).add(1),
            )
            .col_expr(entity::save::Column::Name, Expr::value(save.name))
            .col_expr(entity::save::Column::Notes, Expr::value(save.notes))
            .col_expr(
                entity::save::Column::MiningSpeed,
                Expr::value(save.mining_speed),
            )
            .filter(entity::save::Column::Id.eq(save.id))
            .filter(entity::save::Column::Version.eq(save.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(save.id).await
    }

    /// Deletes a save along with its solar systems
    ///
    /// Returns OK regardless of the save existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Save::delete_by_id(id).exec(self.db).await
    }

    /// Returns one page of saves plus the total number of saves
    pub async fn search(
        &self,
        page: &PageRequest<SaveSortField>,
    ) -> Result<(Vec<entity::save::Model>, u64), DbErr> {
        let total_results = entity::prelude::Save::find().count(self.db).await?;

        let mut query = entity::prelude::Save::find();
        for sort in &page.sorts {
            query = sort.field.apply(query, sort.direction.into());
        }

        let saves = query
            .offset(page.offset())
            .limit(page.size)
            .all(self.db)
            .await?;

        Ok((saves, total_results))
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use sea_orm::{DbErr, SqlErr};
        use tracker_test_utils::prelude::*;

        use crate::server::data::save::SaveRepository;

        /// Expect a save at version 0 without an update timestamp
        #[tokio::test]
        async fn creates_save() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let save = save_repo
                .create("Alpha".to_string(), Some("first run".to_string()), 100)
                .await?;

            assert_eq!(save.version, 0);
            assert!(save.updated_at.is_none());
            assert_eq!(save.notes.as_deref(), Some("first run"));

            Ok(())
        }

        /// Expect a unique violation when the name is already taken
        #[tokio::test]
        async fn fails_for_duplicate_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_save("Alpha").build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let result = save_repo.create("Alpha".to_string(), None, 150).await;

            assert!(matches!(
                result.as_ref().map_err(DbErr::sql_err),
                Err(Some(SqlErr::UniqueConstraintViolation(_)))
            ));

            Ok(())
        }

        /// Expect the mining speed check to reject 99 but accept 100
        #[tokio::test]
        async fn enforces_minimum_mining_speed() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;

            let save_repo = SaveRepository::new(&test.db);

            let result = save_repo.create("Slow".to_string(), None, 99).await;
            assert!(result.is_err());

            let result = save_repo.create("Normal".to_string(), None, 100).await;
            assert!(result.is_ok());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let result = save_repo.create("Alpha".to_string(), None, 100).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use tracker_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::save::SaveRepository;

        #[tokio::test]
        async fn finds_existing_save() -> Result<(), TestError> {
            let test = TestBuilder::new().with_save("Alpha").build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let result = save_repo.get_by_id(test.saves[0].id).await?;

            assert_eq!(result.map(|save| save.name), Some("Alpha".to_string()));

            Ok(())
        }

        #[tokio::test]
        async fn returns_none_for_nonexistent_save() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let result = save_repo.get_by_id(Uuid::new_v4()).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod update {
        use tracker_test_utils::prelude::*;

        use crate::server::data::save::SaveRepository;

        /// Expect the version to be incremented and the update time to be set
        #[tokio::test]
        async fn updates_current_version() -> Result<(), TestError> {
            let test = TestBuilder::new().with_save("Alpha").build().await?;
            let save = test.saves[0].clone();

            let save_repo = SaveRepository::new(&test.db);
            let updated = save_repo
                .update(entity::save::Model {
                    name: "Beta".to_string(),
                    mining_speed: 250,
                    ..save.clone()
                })
                .await?;

            let updated = updated.expect("save should have been updated");
            assert_eq!(updated.version, save.version + 1);
            assert!(updated.updated_at.is_some());
            assert_eq!(updated.name, "Beta");
            assert_eq!(updated.mining_speed, 250);
            assert_eq!(updated.created_at, save.created_at);

            Ok(())
        }

        /// Expect Ok(None) when the version read earlier is no longer current
        #[tokio::test]
        async fn returns_none_for_stale_version() -> Result<(), TestError> {
            let test = TestBuilder::new().with_save("Alpha").build().await?;
            let save = test.saves[0].clone();

            let save_repo = SaveRepository::new(&test.db);
            save_repo.update(save.clone()).await?;
            let result = save_repo.update(save).await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect clearing the notes to write NULL
        #[tokio::test]
        async fn clears_notes() -> Result<(), TestError> {
            let test = TestBuilder::new().with_save("Alpha").build().await?;
            let save = test.saves[0].clone();

            let save_repo = SaveRepository::new(&test.db);
            let noted = save_repo
                .update(entity::save::Model {
                    notes: Some("note".to_string()),
                    ..save
                })
                .await?
                .expect("save should have been updated");
            let cleared = save_repo
                .update(entity::save::Model {
                    notes: None,
                    ..noted
                })
                .await?
                .expect("save should have been updated");

            assert!(cleared.notes.is_none());
            assert_eq!(cleared.version, 2);

            Ok(())
        }
    }

    mod delete {
        use sea_orm::EntityTrait;
        use tracker_test_utils::prelude::*;

        use crate::server::data::save::SaveRepository;

        /// Expect the save and every solar system it owns to be removed
        #[tokio::test]
        async fn cascades_to_solar_systems() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_save("Alpha")
                .with_solar_system("Alpha", "Sol")
                .with_solar_system("Alpha", "Proxima")
                .build()
                .await?;

            let save_repo = SaveRepository::new(&test.db);
            let result = save_repo.delete(test.saves[0].id).await?;

            assert_eq!(result.rows_affected, 1);
            let remaining = entity::prelude::SolarSystem::find().all(&test.db).await?;
            assert!(remaining.is_empty());

            Ok(())
        }

        /// Expect no rows to be affected when deleting a save that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_save() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let result = save_repo.delete(uuid::Uuid::new_v4()).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    mod search {
        use tracker_test_utils::prelude::*;

        use crate::server::{
            data::save::{SaveRepository, SaveSortField},
            model::page::{PageRequest, Sort, SortDirection},
        };

        /// Expect pages to be sliced from the requested sort order with the full total
        #[tokio::test]
        async fn pages_sorted_results() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_save("Charlie")
                .with_save("Alpha")
                .with_save("Bravo")
                .build()
                .await?;

            let save_repo = SaveRepository::new(&test.db);
            let page = PageRequest {
                page: 2,
                size: 2,
                sorts: vec![Sort {
                    field: SaveSortField::Name,
                    direction: SortDirection::Desc,
                }],
            };
            let (saves, total) = save_repo.search(&page).await?;

            assert_eq!(total, 3);
            assert_eq!(saves.len(), 1);
            assert_eq!(saves[0].name, "Alpha");

            Ok(())
        }

        #[tokio::test]
        async fn returns_empty_page_past_the_end() -> Result<(), TestError> {
            let test = TestBuilder::new().with_save("Alpha").build().await?;

            let save_repo = SaveRepository::new(&test.db);
            let page = PageRequest {
                page: 5,
                ..PageRequest::default()
            };
            let (saves, total) = save_repo.search(&page).await?;

            assert!(saves.is_empty());
            assert_eq!(total, 1);

            Ok(())
        }
    }
}
