use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sector::Table)
                    .if_not_exists()
                    .col(pk_auto(Sector::Id))
                    .col(string_uniq(Sector::Name))
                    .col(text_null(Sector::Description))
                    .col(boolean(Sector::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Sector::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Sector::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sector::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sector {
    #[sea_orm(iden = "sectors")]
    Table,
    Id,
    Name,
    Description,
    Active,
    CreatedAt,
    UpdatedAt,
}
