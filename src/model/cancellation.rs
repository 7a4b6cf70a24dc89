use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestCancellationDto {
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CancellationRequestDto {
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
    /// `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    pub reviewed_at: Option<String>,
    pub time_ago: String,
}
