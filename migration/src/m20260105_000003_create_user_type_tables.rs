use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_user_table::User;

/// Creates the role table, the user/role association table and the permission table.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserType::Table)
                    .if_not_exists()
                    .col(pk_auto(UserType::Id))
                    .col(string_uniq(UserType::Name))
                    .col(text_null(UserType::Description))
                    .col(
                        timestamp_with_time_zone(UserType::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserType::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TypeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeUser::Id))
                    .col(integer(TypeUser::UserId))
                    .col(integer(TypeUser::UserTypeId))
                    .col(
                        timestamp_with_time_zone(TypeUser::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_user_user_id")
                            .from(TypeUser::Table, TypeUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_user_user_type_id")
                            .from(TypeUser::Table, TypeUser::UserTypeId)
                            .to(UserType::Table, UserType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_type_user_unique")
                    .table(TypeUser::Table)
                    .col(TypeUser::UserId)
                    .col(TypeUser::UserTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserTypePermission::Table)
                    .if_not_exists()
                    .col(pk_auto(UserTypePermission::Id))
                    .col(integer(UserTypePermission::UserTypeId))
                    .col(string(UserTypePermission::Endpoint))
                    .col(string(UserTypePermission::Method))
                    .col(
                        timestamp_with_time_zone(UserTypePermission::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_type_permissions_user_type_id")
                            .from(UserTypePermission::Table, UserTypePermission::UserTypeId)
                            .to(UserType::Table, UserType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserTypePermission::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TypeUser::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserType {
    #[sea_orm(iden = "user_type")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum TypeUser {
    #[sea_orm(iden = "type_user")]
    Table,
    Id,
    UserId,
    UserTypeId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum UserTypePermission {
    #[sea_orm(iden = "user_type_permissions")]
    Table,
    Id,
    UserTypeId,
    Endpoint,
    Method,
    CreatedAt,
}
