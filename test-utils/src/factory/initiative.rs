//! Initiative factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test initiatives.
///
/// Defaults produce a valid `Submetida` initiative of type `Melhoria` and priority `Média`
/// without sector or deadline.
pub struct InitiativeFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    title: String,
    description: String,
    benefits: String,
    status: String,
    kind: String,
    priority: String,
    sector_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> InitiativeFactory<'a> {
    /// # Arguments
    /// - `db` - Database connection
    /// - `owner_id` - ID of an existing user owning the initiative
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            title: format!("Initiative {}", id),
            description: format!("Automate the monthly report number {}", id),
            benefits: "Saves two hours per week".to_string(),
            status: "Submetida".to_string(),
            kind: "Melhoria".to_string(),
            priority: "Média".to_string(),
            sector_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn sector_id(mut self, sector_id: i32) -> Self {
        self.sector_id = Some(sector_id);
        self
    }

    /// Sets both `created_at` and `updated_at`, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::initiative::Model, DbErr> {
        entity::initiative::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            benefits: ActiveValue::Set(self.benefits),
            status: ActiveValue::Set(self.status),
            kind: ActiveValue::Set(self.kind),
            priority: ActiveValue::Set(self.priority),
            sector_id: ActiveValue::Set(self.sector_id),
            owner_id: ActiveValue::Set(self.owner_id),
            deadline: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a submitted initiative owned by `owner_id`.
pub async fn create_initiative(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::initiative::Model, DbErr> {
    InitiativeFactory::new(db, owner_id).build().await
}
