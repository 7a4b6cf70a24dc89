use sea_orm_migration::{prelude::*, schema::*, sea_orm::ConnectionTrait};

use super::{
    m20260105_000001_create_sector_table::Sector, m20260105_000002_create_user_table::User,
};

/// Creates the per-sector yearly prioritization table and its change request table.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prioritization::Table)
                    .if_not_exists()
                    .col(pk_auto(Prioritization::Id))
                    .col(integer(Prioritization::SectorId))
                    .col(integer(Prioritization::Year))
                    .col(text(Prioritization::PriorityOrder))
                    .col(boolean(Prioritization::IsLocked).default(false))
                    .col(integer(Prioritization::CreatedByUserId))
                    .col(
                        timestamp_with_time_zone(Prioritization::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Prioritization::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prioritization_sector_id")
                            .from(Prioritization::Table, Prioritization::SectorId)
                            .to(Sector::Table, Sector::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prioritization_created_by")
                            .from(Prioritization::Table, Prioritization::CreatedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prioritization_sector_year")
                    .table(Prioritization::Table)
                    .col(Prioritization::SectorId)
                    .col(Prioritization::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChangeRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ChangeRequest::Id))
                    .col(integer(ChangeRequest::PrioritizationId))
                    .col(integer(ChangeRequest::RequestedByUserId))
                    .col(text(ChangeRequest::NewPriorityOrder))
                    .col(text(ChangeRequest::Reason))
                    .col(string(ChangeRequest::Status).default("Pendente"))
                    .col(integer_null(ChangeRequest::ReviewedByUserId))
                    .col(text_null(ChangeRequest::ReviewReason))
                    .col(
                        timestamp_with_time_zone(ChangeRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ChangeRequest::ReviewedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_change_requests_prioritization_id")
                            .from(ChangeRequest::Table, ChangeRequest::PrioritizationId)
                            .to(Prioritization::Table, Prioritization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_change_requests_requested_by")
                            .from(ChangeRequest::Table, ChangeRequest::RequestedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_change_requests_reviewed_by")
                            .from(ChangeRequest::Table, ChangeRequest::ReviewedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One pending change request per prioritization.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_change_requests_one_pending \
                 ON prioritization_change_requests (prioritization_id) \
                 WHERE status = 'Pendente'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChangeRequest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prioritization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prioritization {
    #[sea_orm(iden = "initiative_prioritization")]
    Table,
    Id,
    SectorId,
    Year,
    PriorityOrder,
    IsLocked,
    CreatedByUserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum ChangeRequest {
    #[sea_orm(iden = "prioritization_change_requests")]
    Table,
    Id,
    PrioritizationId,
    RequestedByUserId,
    NewPriorityOrder,
    Reason,
    Status,
    ReviewedByUserId,
    ReviewReason,
    CreatedAt,
    ReviewedAt,
}
