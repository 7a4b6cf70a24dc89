use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// Comment on an initiative with the author's name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub initiative_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, user_name: String) -> Self {
        Self {
            id: entity.id,
            initiative_id: entity.initiative_id,
            user_id: entity.user_id,
            user_name,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            initiative_id: self.initiative_id,
            user_id: self.user_id,
            user_name: self.user_name,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
