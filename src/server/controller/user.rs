use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        user::{ChangePasswordDto, CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::CurrentUser,
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user.
///
/// Hashes the password, links the optional sector and assigns the roles in `type_ids`.
///
/// # Returns
/// - `201 Created` - User created
/// - `400 Bad Request` - Invalid email, short name or password, duplicate email, unknown
///   sector or role
#[utoipa::path(
    post,
    path = "/api/private/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Usuário criado com sucesso",
            user.into_dto(),
        )),
    ))
}

/// List users ordered by name, with roles and sector names.
#[utoipa::path(
    get,
    path = "/api/private/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).list().await?;

    Ok(Json(ApiResponse::list(
        users.into_iter().map(User::into_dto).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/private/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(user.into_dto())))
}

/// Update a user.
///
/// Every field is optional. `type_ids`, when present, replaces all roles of the user.
#[utoipa::path(
    put,
    path = "/api/private/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Usuário atualizado com sucesso",
        user.into_dto(),
    )))
}

/// Delete a user.
///
/// Refused while the user still owns initiatives.
#[utoipa::path(
    delete,
    path = "/api/private/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "User still owns initiatives", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(Json(MessageResponse::new("Usuário deletado com sucesso")))
}

/// Change the caller's own password.
#[utoipa::path(
    post,
    path = "/api/private/change-password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Current password wrong or new password too short", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Senha alterada com sucesso")))
}
