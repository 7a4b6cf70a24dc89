//! Cancellation request domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{cancellation::CancellationRequestDto, initiative::CancellationInfoDto},
    server::util::format::{format_timestamp, time_ago},
};

/// Request to cancel an initiative, with initiative title and user names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationRequest {
    pub id: i32,
    pub initiative_id: i32,
    pub initiative_title: String,
    pub requested_by_user_id: i32,
    pub requested_by_name: String,
    pub reason: String,
    pub status: String,
    pub reviewed_by_user_id: Option<i32>,
    pub reviewed_by_name: Option<String>,
    pub review_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl CancellationRequest {
    /// Converts an entity model plus resolved names into a domain model.
    ///
    /// # Arguments
    /// - `entity` - Cancellation request row
    /// - `initiative_title` - Title of the targeted initiative
    /// - `requested_by_name` - Name of the requester
    /// - `reviewed_by_name` - Name of the reviewer, once reviewed
    pub fn from_entity(
        entity: entity::cancellation_request::Model,
        initiative_title: String,
        requested_by_name: String,
        reviewed_by_name: Option<String>,
    ) -> Self {
        Self {
            id: entity.id,
            initiative_id: entity.initiative_id,
            initiative_title,
            requested_by_user_id: entity.requested_by_user_id,
            requested_by_name,
            reason: entity.reason,
            status: entity.status,
            reviewed_by_user_id: entity.reviewed_by_user_id,
            reviewed_by_name,
            review_reason: entity.review_reason,
            created_at: entity.created_at,
            reviewed_at: entity.reviewed_at,
        }
    }

    pub fn into_dto(self, now: DateTime<Utc>) -> CancellationRequestDto {
        CancellationRequestDto {
            id: self.id,
            initiative_id: self.initiative_id,
            initiative_title: self.initiative_title,
            requested_by_user_id: self.requested_by_user_id,
            requested_by_name: self.requested_by_name,
            reason: self.reason,
            status: self.status,
            reviewed_by_user_id: self.reviewed_by_user_id,
            reviewed_by_name: self.reviewed_by_name,
            review_reason: self.review_reason,
            created_at: format_timestamp(self.created_at),
            reviewed_at: self.reviewed_at.map(format_timestamp),
            time_ago: time_ago(self.created_at, now),
        }
    }

    /// Converts to the summary embedded in initiative responses.
    pub fn into_info_dto(self) -> CancellationInfoDto {
        CancellationInfoDto {
            id: self.id,
            status: self.status,
            reason: self.reason,
            requested_by_user_id: self.requested_by_user_id,
            requested_by_name: self.requested_by_name,
            reviewed_by_user_id: self.reviewed_by_user_id,
            reviewed_by_name: self.reviewed_by_name,
            review_reason: self.review_reason,
            created_at: self.created_at,
            reviewed_at: self.reviewed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCancellationParam {
    pub initiative_id: i32,
    pub requested_by_user_id: i32,
    pub reason: String,
}
