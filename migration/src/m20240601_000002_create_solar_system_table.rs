use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000001_create_save_table::Save;

static FK_SOLAR_SYSTEMS_SAVE_ID: &str = "solar_systems_save_id_fkey";
static UQ_SOLAR_SYSTEMS_SAVE_ID_NAME: &str = "solar_systems_save_id_name_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolarSystem::Table)
                    .if_not_exists()
                    .col(pk_uuid(SolarSystem::Id))
                    .col(timestamp_with_time_zone(SolarSystem::CreatedAt))
                    .col(timestamp_with_time_zone_null(SolarSystem::UpdatedAt))
                    .col(
                        integer(SolarSystem::Version)
                            .check(Expr::col(SolarSystem::Version).gte(0)),
                    )
                    .col(uuid(SolarSystem::SaveId))
                    .col(text(SolarSystem::Name))
                    .col(text_null(SolarSystem::Notes))
                    // Declared with the table: SQLite cannot add a foreign key afterwards.
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOLAR_SYSTEMS_SAVE_ID)
                            .from(SolarSystem::Table, SolarSystem::SaveId)
                            .to(Save::Table, Save::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_SOLAR_SYSTEMS_SAVE_ID_NAME)
                    .table(SolarSystem::Table)
                    .col(SolarSystem::SaveId)
                    .col(SolarSystem::Name)
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
                    .name(UQ_SOLAR_SYSTEMS_SAVE_ID_NAME)
                    .table(SolarSystem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SolarSystem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SolarSystem {
    #[sea_orm(iden = "solar_systems")]
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Version,
    SaveId,
    Name,
    Notes,
}
