//! Sector factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test sectors.
///
/// Defaults: name `"Sector {id}"`, no description, active.
pub struct SectorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    active: bool,
}

impl<'a> SectorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Sector {}", next_id()),
            description: None,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::sector::Model, DbErr> {
        let now = Utc::now();
        entity::sector::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active sector with a unique name.
pub async fn create_sector(db: &DatabaseConnection) -> Result<entity::sector::Model, DbErr> {
    SectorFactory::new(db).build().await
}
