//! Prioritization and change request factories.
//!
//! ID lists are stored as JSON arrays, matching what the server writes.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

fn encode(ids: &[i32]) -> String {
    serde_json::Value::from(ids.to_vec()).to_string()
}

/// Creates a prioritization for a sector and year.
///
/// # Arguments
/// - `db` - Database connection
/// - `sector_id` - Owning sector
/// - `year` - Target year
/// - `order` - Ranked initiative IDs
/// - `is_locked` - Lock state
/// - `created_by_user_id` - User who saved it
pub async fn create_prioritization(
    db: &DatabaseConnection,
    sector_id: i32,
    year: i32,
    order: &[i32],
    is_locked: bool,
    created_by_user_id: i32,
) -> Result<entity::prioritization::Model, DbErr> {
    let now = Utc::now();
    entity::prioritization::ActiveModel {
        sector_id: ActiveValue::Set(sector_id),
        year: ActiveValue::Set(year),
        priority_order: ActiveValue::Set(encode(order)),
        is_locked: ActiveValue::Set(is_locked),
        created_by_user_id: ActiveValue::Set(created_by_user_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a pending change request for a prioritization.
pub async fn create_change_request(
    db: &DatabaseConnection,
    prioritization_id: i32,
    requested_by_user_id: i32,
    new_order: &[i32],
) -> Result<entity::prioritization_change_request::Model, DbErr> {
    entity::prioritization_change_request::ActiveModel {
        prioritization_id: ActiveValue::Set(prioritization_id),
        requested_by_user_id: ActiveValue::Set(requested_by_user_id),
        new_priority_order: ActiveValue::Set(encode(new_order)),
        reason: ActiveValue::Set("Reorder after budget review".to_string()),
        status: ActiveValue::Set("Pendente".to_string()),
        reviewed_by_user_id: ActiveValue::Set(None),
        review_reason: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        reviewed_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
