//! Initiative history factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a history row with an explicit timestamp.
///
/// # Arguments
/// - `db` - Database connection
/// - `initiative_id` - Initiative the transition belongs to
/// - `user_id` - Acting user
/// - `old_status` / `new_status` - Transition endpoints
/// - `created_at` - Row timestamp
pub async fn create_history(
    db: &DatabaseConnection,
    initiative_id: i32,
    user_id: i32,
    old_status: &str,
    new_status: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::initiative_history::Model, DbErr> {
    entity::initiative_history::ActiveModel {
        initiative_id: ActiveValue::Set(initiative_id),
        user_id: ActiveValue::Set(user_id),
        old_status: ActiveValue::Set(old_status.to_string()),
        new_status: ActiveValue::Set(new_status.to_string()),
        reason: ActiveValue::Set(format!("{} -> {}", old_status, new_status)),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
