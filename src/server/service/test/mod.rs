use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::AppError,
    model::user::User,
};

mod auth;
mod initiative;
mod prioritization;
mod sector;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap()
}

async fn load_user(db: &DatabaseConnection, id: i32) -> Result<User, AppError> {
    Ok(UserRepository::new(db)
        .find_by_id(id)
        .await?
        .expect("user should exist"))
}

/// Creates a user holding `role`, optionally linked to a sector, and loads it with roles.
async fn user_with_role(
    db: &DatabaseConnection,
    role: &str,
    sector_id: Option<i32>,
) -> Result<User, AppError> {
    let mut builder = factory::user::UserFactory::new(db);
    if let Some(sector_id) = sector_id {
        builder = builder.sector_id(sector_id);
    }
    let user = builder.build().await?;

    let user_type = match PermissionRepository::new(db)
        .find_user_type_by_name(role)
        .await?
    {
        Some(user_type) => user_type.id,
        None => factory::create_user_type(db, role).await?.id,
    };
    factory::assign_user_type(db, user.id, user_type).await?;

    load_user(db, user.id).await
}

fn assert_bad_request<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, expected),
        other => panic!("expected BadRequest({expected:?}), got {other:?}"),
    }
}
