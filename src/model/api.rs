use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
    pub code: u16,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            success: false,
            error: error.into(),
            code,
        }
    }
}

/// Success envelope carrying a payload.
///
/// `message` is only present on mutations, `count` only on list responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            count: None,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            message: None,
            data,
            count: Some(count),
        }
    }
}

/// Success envelope used by the auth endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse<T> {
    pub success: bool,
    pub user: T,
}

impl<T> UserResponse<T> {
    pub fn new(user: T) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

/// Success envelope for operations with nothing to return.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub success: bool,
    pub status: String,
    pub database: String,
}

/// Approve/reject decision shared by every review endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub approved: bool,
    #[serde(default)]
    pub reason: String,
}
