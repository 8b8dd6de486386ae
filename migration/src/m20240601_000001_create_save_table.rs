use sea_orm_migration::{prelude::*, schema::*};

static UQ_SAVES_NAME: &str = "saves_name_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Save::Table)
                    .if_not_exists()
                    .col(pk_uuid(Save::Id))
                    .col(timestamp_with_time_zone(Save::CreatedAt))
                    .col(timestamp_with_time_zone_null(Save::UpdatedAt))
                    .col(integer(Save::Version).check(Expr::col(Save::Version).gte(0)))
                    .col(text(Save::Name))
                    .col(text_null(Save::Notes))
                    .col(integer(Save::MiningSpeed).check(Expr::col(Save::MiningSpeed).gte(100)))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_SAVES_NAME)
                    .table(Save::Table)
                    .col(Save::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(UQ_SAVES_NAME).table(Save::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Save::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Save {
    #[sea_orm(iden = "saves")]
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Version,
    Name,
    Notes,
    MiningSpeed,
}
