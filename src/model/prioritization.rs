use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::initiative::InitiativeListItemDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SavePrioritizationDto {
    pub year: i32,
    pub priority_order: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestChangeDto {
    pub new_priority_order: Vec<i32>,
    #[serde(default)]
    pub reason: String,
}

/// A sector's ranking for one year with the ranked initiatives resolved.
///
/// `id` is 0 and `is_locked` false when the sector has not saved a ranking yet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrioritizationDto {
    pub id: i32,
    pub sector_id: i32,
    pub sector_name: String,
    pub year: i32,
    pub priority_order: Vec<i32>,
    pub is_locked: bool,
    pub initiatives: Vec<InitiativeListItemDto>,
    pub created_by_user_id: Option<i32>,
    pub created_by_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AllPrioritizationsDto {
    pub year: i32,
    pub sectors: Vec<PrioritizationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeRequestDto {
    pub id: i32,
    pub prioritization_id: i32,
    pub sector_id: i32,
    pub sector_name: String,
    pub year: i32,
    pub requested_by_user_id: i32,
    pub requested_by_name: String,
    pub new_priority_order: Vec<i32>,
    pub reason: String,
    pub status: String,
    pub reviewed_by_user_id: Option<i32>,
    pub reviewed_by_name: Option<String>,
    pub review_reason: Option<String>,
    pub created_at: String,
    pub reviewed_at: Option<String>,
    pub time_ago: String,
}

/// Target year of a prioritization request, defaulting to the current year.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct YearQuery {
    pub year: Option<i32>,
}
