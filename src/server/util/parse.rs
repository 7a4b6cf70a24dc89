use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::server::error::AppError;

/// Parses an optional `YYYY-MM-DD` deadline.
///
/// # Arguments
/// - `value` - Raw deadline from the request body
///
/// # Returns
/// - `Ok(None)` - Value absent or blank
/// - `Ok(Some(NaiveDate))` - Valid date
/// - `Err(AppError::BadRequest)` - Value present but not a valid date
pub fn parse_deadline(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::bad_request("formato de data inválido, use YYYY-MM-DD"))
}

/// Decodes a stored JSON array of initiative IDs.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Decoded IDs in stored order
/// - `Err(DbErr::Custom)` - Stored value is not a JSON array of integers
pub fn parse_id_list(value: &str) -> Result<Vec<i32>, DbErr> {
    serde_json::from_str(value)
        .map_err(|e| DbErr::Custom(format!("Failed to parse stored ID list '{}': {}", value, e)))
}

/// Encodes initiative IDs as a JSON array for storage.
pub fn encode_id_list(ids: &[i32]) -> String {
    serde_json::Value::from(ids.to_vec()).to_string()
}
