use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_sector_table::Sector, m20260105_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Initiative::Table)
                    .if_not_exists()
                    .col(pk_auto(Initiative::Id))
                    .col(string(Initiative::Title))
                    .col(text(Initiative::Description))
                    .col(text(Initiative::Benefits))
                    .col(string(Initiative::Status))
                    .col(string(Initiative::Type))
                    .col(string(Initiative::Priority))
                    .col(integer_null(Initiative::SectorId))
                    .col(integer(Initiative::OwnerId))
                    .col(date_null(Initiative::Deadline))
                    .col(
                        timestamp_with_time_zone(Initiative::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Initiative::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_initiatives_owner_id")
                            .from(Initiative::Table, Initiative::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_initiatives_sector_id")
                            .from(Initiative::Table, Initiative::SectorId)
                            .to(Sector::Table, Sector::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_initiatives_status")
                    .table(Initiative::Table)
                    .col(Initiative::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_initiatives_owner_id")
                    .table(Initiative::Table)
                    .col(Initiative::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Initiative::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Initiative {
    #[sea_orm(iden = "initiatives")]
    Table,
    Id,
    Title,
    Description,
    Benefits,
    Status,
    Type,
    Priority,
    SectorId,
    OwnerId,
    Deadline,
    CreatedAt,
    UpdatedAt,
}
