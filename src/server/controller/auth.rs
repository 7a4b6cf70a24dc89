use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageResponse, UserResponse},
        auth::LoginDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        extract::Json,
        middleware::auth::{build_auth_cookie, clear_auth_cookie, CurrentUser},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// On success sets the encrypted `auth_token` cookie, valid for 24 hours, and returns the
/// user with roles and sector name.
///
/// # Returns
/// - `200 OK` - Logged in, cookie set
/// - `400 Bad Request` - Email or password blank
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserResponse<UserDto>),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let cookie = build_auth_cookie(&state.cookie_key, &state.settings.security, user.id);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserResponse::new(user.into_dto())),
    ))
}

/// Log out by expiring the `auth_token` cookie.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    ),
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_auth_cookie(&state.settings.security);

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("Logout realizado com sucesso")),
    )
}

/// Get the authenticated user.
#[utoipa::path(
    get,
    path = "/api/private/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserResponse<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(UserResponse::new(user.into_dto())))
}

/// Liveness check that also pings the database.
///
/// Always answers 200; `database` is `"unavailable"` when the ping fails.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Service status", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!("Database ping failed: {}", err);
            "unavailable"
        }
    };

    Json(HealthDto {
        success: true,
        status: "ok".to_string(),
        database: database.to_string(),
    })
}
