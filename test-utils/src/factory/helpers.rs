//! Shared helper utilities for factory methods.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user holding the named role.
///
/// Reuses the role row if one with that name already exists, so several users can share
/// `"admin"` or `"manager"` within one test.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role name, such as `"admin"`, `"manager"` or `"user"`
///
/// # Returns
/// - `Ok((user, user_type))` - Created user and the role it holds
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<(entity::user::Model, entity::user_type::Model), DbErr> {
    let existing = entity::prelude::UserType::find()
        .filter(entity::user_type::Column::Name.eq(role))
        .one(db)
        .await?;

    let user_type = match existing {
        Some(user_type) => user_type,
        None => crate::factory::user_type::create_user_type(db, role).await?,
    };

    let user = crate::factory::user::create_user(db).await?;
    crate::factory::user_type::assign_user_type(db, user.id, user_type.id).await?;

    Ok((user, user_type))
}
