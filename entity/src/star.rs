use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SpectralClass;

/// The stellar body of a solar system, at most one per system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub version: i32,
    #[sea_orm(unique)]
    pub solar_system_id: Uuid,
    pub spectral_class: SpectralClass,
    pub luminosity: f32,
    pub radius: f32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::solar_system::Entity",
        from = "Column::SolarSystemId",
        to = "super::solar_system::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    SolarSystem,
}

impl Related<super::solar_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
