use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        user::{PersonalInformationDto, UserTypeDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::CurrentUser,
        model::user::UserType,
        service::permission::PermissionService,
        state::AppState,
    },
};

/// Tag for grouping role and permission endpoints in OpenAPI documentation
pub static PERMISSION_TAG: &str = "permission";

/// Get the caller's profile together with their roles.
#[utoipa::path(
    get,
    path = "/api/private/personal-information",
    tag = PERMISSION_TAG,
    responses(
        (status = 200, description = "Profile and roles", body = ApiResponse<PersonalInformationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_personal_information(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let user = PermissionService::new(&state.db)
        .get_personal_information(user.id)
        .await?;

    let user_types = user
        .user_types
        .iter()
        .cloned()
        .map(UserType::into_dto)
        .collect();

    Ok(Json(ApiResponse::data(PersonalInformationDto {
        user: user.into_dto(),
        user_types,
    })))
}

/// List every role.
#[utoipa::path(
    get,
    path = "/api/private/user-types",
    tag = PERMISSION_TAG,
    responses(
        (status = 200, description = "Roles", body = ApiResponse<Vec<UserTypeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let types = PermissionService::new(&state.db).list_user_types().await?;

    Ok(Json(ApiResponse::list(
        types.into_iter().map(UserType::into_dto).collect(),
    )))
}

/// Grant a role to a user.
///
/// # Returns
/// - `200 OK` - Role granted, or already held
/// - `404 Not Found` - User or role does not exist
#[utoipa::path(
    post,
    path = "/api/private/admin/users/{userId}/types/{typeId}",
    tag = PERMISSION_TAG,
    params(
        ("userId" = i32, Path, description = "User ID"),
        ("typeId" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role granted", body = MessageResponse),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_user_type(
    State(state): State<AppState>,
    Path((user_id, type_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    PermissionService::new(&state.db)
        .assign_user_type(user_id, type_id)
        .await?;

    Ok(Json(MessageResponse::new("Tipo atribuído com sucesso")))
}

/// Revoke a role from a user.
#[utoipa::path(
    delete,
    path = "/api/private/admin/users/{userId}/types/{typeId}",
    tag = PERMISSION_TAG,
    params(
        ("userId" = i32, Path, description = "User ID"),
        ("typeId" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role revoked", body = MessageResponse),
        (status = 404, description = "User, role, or link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_type(
    State(state): State<AppState>,
    Path((user_id, type_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    PermissionService::new(&state.db)
        .remove_user_type(user_id, type_id)
        .await?;

    Ok(Json(MessageResponse::new("Tipo removido com sucesso")))
}
