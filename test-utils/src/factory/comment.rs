//! Comment factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a comment created at `created_at`.
pub async fn create_comment_at(
    db: &DatabaseConnection,
    initiative_id: i32,
    user_id: i32,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        initiative_id: ActiveValue::Set(initiative_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(created_at),
        updated_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a comment created now.
pub async fn create_comment(
    db: &DatabaseConnection,
    initiative_id: i32,
    user_id: i32,
    content: &str,
) -> Result<entity::comment::Model, DbErr> {
    create_comment_at(db, initiative_id, user_id, content, Utc::now()).await
}
