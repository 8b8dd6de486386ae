use sea_orm::entity::prelude::*;

/// A single game-save profile, owner of its solar systems.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "saves")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub version: i32,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub mining_speed: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::solar_system::Entity")]
    SolarSystem,
}

impl Related<super::solar_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
