use sea_orm_migration::{prelude::*, schema::*, sea_orm::ConnectionTrait};

use super::{
    m20260105_000002_create_user_table::User, m20260105_000004_create_initiative_table::Initiative,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CancellationRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(CancellationRequest::Id))
                    .col(integer(CancellationRequest::InitiativeId))
                    .col(integer(CancellationRequest::RequestedByUserId))
                    .col(text(CancellationRequest::Reason))
                    .col(string(CancellationRequest::Status).default("Pendente"))
                    .col(integer_null(CancellationRequest::ReviewedByUserId))
                    .col(text_null(CancellationRequest::ReviewReason))
                    .col(
                        timestamp_with_time_zone(CancellationRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(
                        CancellationRequest::ReviewedAt,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cancellation_requests_initiative_id")
                            .from(
                                CancellationRequest::Table,
                                CancellationRequest::InitiativeId,
                            )
                            .to(Initiative::Table, Initiative::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cancellation_requests_requested_by")
                            .from(
                                CancellationRequest::Table,
                                CancellationRequest::RequestedByUserId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cancellation_requests_reviewed_by")
                            .from(
                                CancellationRequest::Table,
                                CancellationRequest::ReviewedByUserId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One pending request per initiative.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_cancellation_requests_one_pending \
                 ON initiative_cancellation_requests (initiative_id) \
                 WHERE status = 'Pendente'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CancellationRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CancellationRequest {
    #[sea_orm(iden = "initiative_cancellation_requests")]
    Table,
    Id,
    InitiativeId,
    RequestedByUserId,
    Reason,
    Status,
    ReviewedByUserId,
    ReviewReason,
    CreatedAt,
    ReviewedAt,
}
