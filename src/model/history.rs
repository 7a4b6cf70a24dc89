use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryDto {
    pub id: i32,
    pub initiative_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub old_status: String,
    pub new_status: String,
    pub reason: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    pub time_ago: String,
}
