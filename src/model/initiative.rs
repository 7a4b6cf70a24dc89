use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Latest cancellation request attached to an initiative.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CancellationInfoDto {
    pub id: i32,
    pub status: String,
    pub reason: String,
    pub requested_by_user_id: i32,
    pub requested_by_name: String,
    pub reviewed_by_user_id: Option<i32>,
    pub reviewed_by_name: Option<String>,
    pub review_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitiativeDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub sector_id: Option<i32>,
    pub sector: Option<String>,
    pub owner_id: i32,
    pub owner_name: String,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub cancellation_request: Option<CancellationInfoDto>,
}

/// Compact listing row: description truncated, date pre-formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitiativeListItemDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub sector_id: Option<i32>,
    pub sector: Option<String>,
    pub owner_id: i32,
    pub owner_name: String,
    pub date: String,
    pub cancellation_request: Option<CancellationInfoDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInitiativeDto {
    pub title: String,
    pub description: String,
    pub benefits: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    #[serde(default)]
    pub sector_id: Option<i32>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateInitiativeDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<String>,
    pub sector_id: Option<i32>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeStatusDto {
    pub status: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct InitiativeFilterQuery {
    /// Case-insensitive match on title or description.
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    #[param(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<String>,
    /// Sector name, exact match.
    pub sector: Option<String>,
    pub sector_id: Option<i32>,
}
