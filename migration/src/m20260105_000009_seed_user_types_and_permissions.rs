use sea_orm_migration::{prelude::*, sea_orm::ConnectionTrait};

use super::m20260105_000003_create_user_type_tables::{UserType, UserTypePermission};

const ADMIN: &str = "admin";
const MANAGER: &str = "manager";
const USER: &str = "user";

const ROLES: &[(&str, &str)] = &[
    (ADMIN, "Administrador do sistema"),
    (MANAGER, "Gestor responsável por revisões e priorização"),
    (USER, "Usuário padrão"),
];

/// Routes every role may call.
const COMMON_ROUTES: &[(&str, &str)] = &[
    ("GET", "/api/private/me"),
    ("GET", "/api/private/personal-information"),
    ("POST", "/api/private/change-password"),
    ("GET", "/api/private/user-types"),
    ("GET", "/api/private/initiatives"),
    ("POST", "/api/private/initiatives"),
    ("GET", "/api/private/initiatives/{id}"),
    ("PUT", "/api/private/initiatives/{id}"),
    ("DELETE", "/api/private/initiatives/{id}"),
    ("GET", "/api/private/initiatives/{id}/history"),
    ("POST", "/api/private/initiatives/{id}/cancellation"),
    ("GET", "/api/private/my-initiatives"),
    ("GET", "/api/private/initiatives/{initiativeId}/comments"),
    ("POST", "/api/private/initiatives/{initiativeId}/comments"),
    ("PUT", "/api/private/comments/{id}"),
    ("DELETE", "/api/private/comments/{id}"),
    ("GET", "/api/private/sectors"),
    ("GET", "/api/private/sectors/{id}"),
    ("GET", "/api/private/prioritization"),
    ("POST", "/api/private/prioritization"),
    ("POST", "/api/private/prioritization/request-change"),
    ("POST", "/api/private/ai/refine-text"),
];

/// Review and oversight routes for managers and admins.
const REVIEW_ROUTES: &[(&str, &str)] = &[
    ("GET", "/api/private/initiatives/submitted"),
    ("POST", "/api/private/initiatives/{id}/review"),
    ("GET", "/api/private/cancellation-requests"),
    ("GET", "/api/private/cancellation-requests/{id}"),
    ("POST", "/api/private/cancellation-requests/{id}/review"),
    ("GET", "/api/private/prioritization/all"),
    ("GET", "/api/private/prioritization/change-requests"),
    ("POST", "/api/private/prioritization/change-requests/{id}/review"),
    ("GET", "/api/private/users"),
    ("GET", "/api/private/users/{id}"),
];

const ADMIN_ROUTES: &[(&str, &str)] = &[
    ("PATCH", "/api/private/initiatives/{id}/status"),
    ("POST", "/api/private/sectors"),
    ("PUT", "/api/private/sectors/{id}"),
    ("DELETE", "/api/private/sectors/{id}"),
    ("POST", "/api/private/users"),
    ("PUT", "/api/private/users/{id}"),
    ("DELETE", "/api/private/users/{id}"),
    ("POST", "/api/private/admin/users/{userId}/types/{typeId}"),
    ("DELETE", "/api/private/admin/users/{userId}/types/{typeId}"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, description) in ROLES {
            let insert = Query::insert()
                .into_table(UserType::Table)
                .columns([UserType::Name, UserType::Description])
                .values_panic([(*name).into(), (*description).into()])
                .to_owned();
            db.execute(&insert).await?;
        }

        let grants: [(&str, &[&[(&str, &str)]]); 3] = [
            (ADMIN, &[COMMON_ROUTES, REVIEW_ROUTES, ADMIN_ROUTES]),
            (MANAGER, &[COMMON_ROUTES, REVIEW_ROUTES]),
            (USER, &[COMMON_ROUTES]),
        ];

        for (role, groups) in grants {
            for (method, endpoint) in groups.iter().flat_map(|group| group.iter()) {
                let select = Query::select()
                    .column(UserType::Id)
                    .expr(Expr::val(*endpoint))
                    .expr(Expr::val(*method))
                    .from(UserType::Table)
                    .and_where(Expr::col(UserType::Name).eq(role))
                    .to_owned();

                let insert = Query::insert()
                    .into_table(UserTypePermission::Table)
                    .columns([
                        UserTypePermission::UserTypeId,
                        UserTypePermission::Endpoint,
                        UserTypePermission::Method,
                    ])
                    .select_from(select)
                    .map_err(|e| DbErr::Migration(e.to_string()))?
                    .to_owned();
                db.execute(&insert).await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let names: Vec<&str> = ROLES.iter().map(|(name, _)| *name).collect();
        let delete = Query::delete()
            .from_table(UserType::Table)
            .and_where(Expr::col(UserType::Name).is_in(names))
            .to_owned();
        db.execute(&delete).await?;

        Ok(())
    }
}
