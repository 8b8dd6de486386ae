//! Solar system persistence, including the paged search with its name filter.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use uuid::Uuid;

use crate::server::{
    data::save::SaveSortField,
    model::page::{PageRequest, SortField},
};

/// Fields a solar system search can be ordered by, including fields of the owning save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolarSystemSortField {
    /// `id`
    Id,
    /// `created_at`, the default
    #[default]
    CreatedAt,
    /// `name`
    Name,
    /// `notes`
    Notes,
    /// `save.<field>`, a field of the owning save
    Save(SaveSortField),
}

impl SolarSystemSortField {
    /// Whether ordering by this field needs the `saves` table joined in.
    pub fn needs_save_join(&self) -> bool {
        matches!(self, Self::Save(_))
    }

    /// Add this field to the `ORDER BY` clause of `query`.
    pub fn apply<Q: QueryOrder>(&self, query: Q, order: Order) -> Q {
        match self {
            Self::Id => query.order_by(entity::solar_system::Column::Id, order),
            Self::CreatedAt => query.order_by(entity::solar_system::Column::CreatedAt, order),
            Self::Name => query.order_by(entity::solar_system::Column::Name, order),
            Self::Notes => query.order_by(entity::solar_system::Column::Notes, order),
            Self::Save(field) => field.apply(query, order),
        }
    }
}

impl SortField for SolarSystemSortField {
    fn name(&self) -> String {
        match self {
            Self::Id => "id".to_string(),
            Self::CreatedAt => "created_at".to_string(),
            Self::Name => "name".to_string(),
            Self::Notes => "notes".to_string(),
            Self::Save(field) => format!("save.{}", field.name()),
        }
    }

    fn values() -> Vec<Self> {
        let mut values = vec![Self::Id, Self::CreatedAt, Self::Name, Self::Notes];
        values.extend(SaveSortField::values().into_iter().map(Self::Save));
        values
    }
}

/// Queries on the `solar_systems` table.
pub struct SolarSystemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SolarSystemRepository<'a, C> {
    /// Creates a new instance of [`SolarSystemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new solar system into the save `save_id`
    pub async fn create(
        &self,
        save_id: Uuid,
        name: String,
        notes: Option<String>,
    ) -> Result<entity::solar_system::Model, DbErr> {
        let solar_system = entity::solar_system::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            save_id: ActiveValue::Set(save_id),
            name: ActiveValue::Set(name),
            notes: ActiveValue::Set(notes),
        };

        solar_system.insert(self.db).await
    }

    /// Finds a solar system by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::solar_system::Model>, DbErr> {
        entity::prelude::SolarSystem::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Writes `name` and `notes` if the version of `solar_system` is still current
    ///
    /// Returns `Ok(None)` when no row matched the id and version. The owning save
    /// can't be changed.
    pub async fn update(
        &self,
        solar_system: entity::solar_system::Model,
    ) -> Result<Option<entity::solar_system::Model>, DbErr> {
        let result = entity::prelude::SolarSystem::update_many()
            .col_expr(
                entity::solar_system::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .col_expr(
                entity::solar_system::Column::Version,
                Expr::col(entity::solar_system::Column::Version).add(1),
            )
            .col_expr(
                entity::solar_system::Column::Name,
                Expr::value(solar_system.name),
            )
            .col_expr(
                entity::solar_system::Column::Notes,
                Expr::value(solar_system.notes),
            )
            .filter(entity::solar_system::Column::Id.eq(solar_system.id))
            .filter(entity::solar_system::Column::Version.eq(solar_system.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(solar_system.id).await
    }

    /// Deletes a solar system
    ///
    /// Fails with a foreign key violation while the solar system still has a star.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::SolarSystem::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Returns one page of the solar systems of `save_id` plus the number of matches
    ///
    /// # Arguments
    /// - `save_id` - Save whose solar systems are searched
    /// - `name` - Optional filter, see [`name_matches`]
    /// - `page` - Page, size and sort order
    pub async fn search(
        &self,
        save_id: Uuid,
        name: Option<&str>,
        page: &PageRequest<SolarSystemSortField>,
    ) -> Result<(Vec<entity::solar_system::Model>, u64), DbErr> {
        let mut query = entity::prelude::SolarSystem::find()
            .filter(entity::solar_system::Column::SaveId.eq(save_id));

        if let Some(name) = name {
            query = query.filter(name_matches(name));
        }

        let total_results = query.clone().count(self.db).await?;

        if page.sorts.iter().any(|sort| sort.field.needs_save_join()) {
            query = query.join(
                JoinType::LeftJoin,
                entity::solar_system::Relation::Save.def(),
            );
        }

        for sort in &page.sorts {
            query = sort.field.apply(query, sort.direction.into());
        }

        let solar_systems = query
            .offset(page.offset())
            .limit(page.size)
            .all(self.db)
            .await?;

        Ok((solar_systems, total_results))
    }
}

/// Characters that separate the words of a name.
const WORD_SEPARATORS: [char; 6] = [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}'];

/// Condition matching names where any whitespace separated word starts with `term`.
///
/// Case-insensitive. `%`, `_` and `\` in `term` match literally.
pub fn name_matches(term: &str) -> Condition {
    let escaped = escape_like(&term.to_lowercase());
    let name = || {
        Expr::expr(Func::lower(Expr::col((
            entity::solar_system::Entity,
            entity::solar_system::Column::Name,
        ))))
    };

    WORD_SEPARATORS.iter().fold(
        Condition::any().add(name().like(LikeExpr::new(format!("{}%", escaped)).escape('\\'))),
        |condition, separator| {
            condition.add(
                name().like(LikeExpr::new(format!("%{}{}%", separator, escaped)).escape('\\')),
            )
        },
    )
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
