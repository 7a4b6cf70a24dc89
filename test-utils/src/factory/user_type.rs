//! Role factories: role rows, user membership and role permissions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role with the given name.
pub async fn create_user_type(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::user_type::Model, DbErr> {
    let now = Utc::now();
    entity::user_type::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a role.
pub async fn assign_user_type(
    db: &DatabaseConnection,
    user_id: i32,
    user_type_id: i32,
) -> Result<entity::type_user::Model, DbErr> {
    entity::type_user::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        user_type_id: ActiveValue::Set(user_type_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Grants a role access to a route pattern.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_type_id` - Role receiving the permission
/// - `endpoint` - Route pattern, `{name}` segments match any single path segment
/// - `method` - Uppercase HTTP method
pub async fn grant_permission(
    db: &DatabaseConnection,
    user_type_id: i32,
    endpoint: &str,
    method: &str,
) -> Result<entity::user_type_permission::Model, DbErr> {
    entity::user_type_permission::ActiveModel {
        user_type_id: ActiveValue::Set(user_type_id),
        endpoint: ActiveValue::Set(endpoint.to_string()),
        method: ActiveValue::Set(method.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
