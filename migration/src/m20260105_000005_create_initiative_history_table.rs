use sea_orm_migration::{prelude::*, schema::*};

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
                    .table(InitiativeHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(InitiativeHistory::Id))
                    .col(integer(InitiativeHistory::InitiativeId))
                    .col(integer(InitiativeHistory::UserId))
                    .col(string(InitiativeHistory::OldStatus))
                    .col(string(InitiativeHistory::NewStatus))
                    .col(text(InitiativeHistory::Reason))
                    .col(
                        timestamp_with_time_zone(InitiativeHistory::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_initiative_history_initiative_id")
                            .from(InitiativeHistory::Table, InitiativeHistory::InitiativeId)
                            .to(Initiative::Table, Initiative::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_initiative_history_user_id")
                            .from(InitiativeHistory::Table, InitiativeHistory::UserId)
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
                    .name("idx_initiative_history_initiative_id")
                    .table(InitiativeHistory::Table)
                    .col(InitiativeHistory::InitiativeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InitiativeHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InitiativeHistory {
    Table,
    Id,
    InitiativeId,
    UserId,
    OldStatus,
    NewStatus,
    Reason,
    CreatedAt,
}
