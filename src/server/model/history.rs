//! Initiative status history.

use chrono::{DateTime, Utc};

use crate::{
    model::history::HistoryDto,
    server::util::format::{format_timestamp, time_ago},
};

/// One recorded status transition, with the acting user's name.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: i32,
    pub initiative_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub old_status: String,
    pub new_status: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn from_entity(entity: entity::initiative_history::Model, user_name: String) -> Self {
        Self {
            id: entity.id,
            initiative_id: entity.initiative_id,
            user_id: entity.user_id,
            user_name,
            old_status: entity.old_status,
            new_status: entity.new_status,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }

    /// # Arguments
    /// - `now` - Reference time for `time_ago`
    pub fn into_dto(self, now: DateTime<Utc>) -> HistoryDto {
        HistoryDto {
            id: self.id,
            initiative_id: self.initiative_id,
            user_id: self.user_id,
            user_name: self.user_name,
            old_status: self.old_status,
            new_status: self.new_status,
            reason: self.reason,
            created_at: format_timestamp(self.created_at),
            time_ago: time_ago(self.created_at, now),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHistoryParam {
    pub initiative_id: i32,
    pub user_id: i32,
    pub old_status: String,
    pub new_status: String,
    pub reason: String,
}
