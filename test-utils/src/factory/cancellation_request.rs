//! Cancellation request factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for cancellation requests. Defaults to a `Pendente` request created now.
pub struct CancellationRequestFactory<'a> {
    db: &'a DatabaseConnection,
    initiative_id: i32,
    requested_by_user_id: i32,
    reason: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> CancellationRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, initiative_id: i32, requested_by_user_id: i32) -> Self {
        Self {
            db,
            initiative_id,
            requested_by_user_id,
            reason: "No longer needed by the sector".to_string(),
            status: "Pendente".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::cancellation_request::Model, DbErr> {
        entity::cancellation_request::ActiveModel {
            initiative_id: ActiveValue::Set(self.initiative_id),
            requested_by_user_id: ActiveValue::Set(self.requested_by_user_id),
            reason: ActiveValue::Set(self.reason),
            status: ActiveValue::Set(self.status),
            reviewed_by_user_id: ActiveValue::Set(None),
            review_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending cancellation request.
pub async fn create_cancellation_request(
    db: &DatabaseConnection,
    initiative_id: i32,
    requested_by_user_id: i32,
) -> Result<entity::cancellation_request::Model, DbErr> {
    CancellationRequestFactory::new(db, initiative_id, requested_by_user_id)
        .build()
        .await
}
