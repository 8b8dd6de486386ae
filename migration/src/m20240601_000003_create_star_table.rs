use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::{sea_query::extension::postgres::Type, DbBackend},
};

use crate::m20240601_000002_create_solar_system_table::SolarSystem;

static FK_STARS_SOLAR_SYSTEM_ID: &str = "stars_solar_system_id_fkey";
static UQ_STARS_SOLAR_SYSTEM_ID: &str = "stars_solar_system_id_key";

const SPECTRAL_CLASSES: [&str; 14] = [
    "class_a",
    "class_b",
    "class_f",
    "class_g",
    "class_k",
    "class_m",
    "class_o",
    "red_giant",
    "yellow_giant",
    "white_giant",
    "blue_giant",
    "white_dwarf",
    "black_hole",
    "neutron",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let is_postgres = manager.get_database_backend() == DbBackend::Postgres;

        // Only PostgreSQL has named enum types; elsewhere the column is text
        // restricted to the same members.
        let spectral_class = if is_postgres {
            manager
                .create_type(
                    Type::create()
                        .as_enum(SpectralClass)
                        .values(SPECTRAL_CLASSES.map(Alias::new))
                        .to_owned(),
                )
                .await?;

            enumeration(
                Star::SpectralClass,
                SpectralClass,
                SPECTRAL_CLASSES.map(Alias::new),
            )
        } else {
            text(Star::SpectralClass)
                .check(Expr::col(Star::SpectralClass).is_in(SPECTRAL_CLASSES))
                .to_owned()
        };

        manager
            .create_table(
                Table::create()
                    .table(Star::Table)
                    .if_not_exists()
                    .col(pk_uuid(Star::Id))
                    .col(timestamp_with_time_zone(Star::CreatedAt))
                    .col(timestamp_with_time_zone_null(Star::UpdatedAt))
                    .col(integer(Star::Version).check(Expr::col(Star::Version).gte(0)))
                    .col(uuid(Star::SolarSystemId))
                    .col(spectral_class)
                    .col(float(Star::Luminosity).check(Expr::col(Star::Luminosity).gt(0.0)))
                    // The legacy `positive_radius` check tested `version > 0.0`, rejecting every new star
                    .col(float(Star::Radius).check(Expr::col(Star::Radius).gt(0.0)))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STARS_SOLAR_SYSTEM_ID)
                            .from(Star::Table, Star::SolarSystemId)
                            .to(SolarSystem::Table, SolarSystem::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_STARS_SOLAR_SYSTEM_ID)
                    .table(Star::Table)
                    .col(Star::SolarSystemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_STARS_SOLAR_SYSTEM_ID)
                    .table(Star::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Star::Table).to_owned())
            .await?;

        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .drop_type(Type::drop().name(SpectralClass).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
pub struct SpectralClass;

#[derive(DeriveIden)]
pub enum Star {
    #[sea_orm(iden = "stars")]
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Version,
    SolarSystemId,
    SpectralClass,
    Luminosity,
    Radius,
}
