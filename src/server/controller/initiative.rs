use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse, ReviewDto},
        history::HistoryDto,
        initiative::{
            ChangeStatusDto, CreateInitiativeDto, InitiativeDto, InitiativeFilterQuery,
            InitiativeListItemDto, UpdateInitiativeDto,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::CurrentUser,
        model::{
            initiative::{
                ChangeStatusParam, CreateInitiativeParam, Initiative, InitiativeFilter,
                UpdateInitiativeParam,
            },
            review::ReviewParam,
        },
        service::{history::HistoryService, initiative::InitiativeService},
        state::AppState,
    },
};

/// Tag for grouping initiative endpoints in OpenAPI documentation
pub static INITIATIVE_TAG: &str = "initiative";

/// Submit a new initiative.
///
/// The initiative starts as `Submetida`, owned by the caller and linked to the caller's
/// sector unless `sector_id` is given. A creation entry is written to its history.
///
/// # Access Control
/// - Any authenticated user with the route permission
///
/// # Returns
/// - `201 Created` - Initiative created
/// - `400 Bad Request` - Title, description, or benefits too short; unknown type or
///   priority; malformed deadline
#[utoipa::path(
    post,
    path = "/api/private/initiatives",
    tag = INITIATIVE_TAG,
    request_body = CreateInitiativeDto,
    responses(
        (status = 201, description = "Initiative created", body = ApiResponse<InitiativeDto>),
        (status = 400, description = "Invalid initiative data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_initiative(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateInitiativeDto>,
) -> Result<impl IntoResponse, AppError> {
    let initiative = InitiativeService::new(&state.db)
        .create(&user, CreateInitiativeParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Iniciativa criada com sucesso",
            initiative.into_dto(),
        )),
    ))
}

/// List initiatives, newest first.
///
/// All query filters are optional and combined. Each row carries its latest cancellation
/// request, if any.
#[utoipa::path(
    get,
    path = "/api/private/initiatives",
    tag = INITIATIVE_TAG,
    params(InitiativeFilterQuery),
    responses(
        (status = 200, description = "Initiatives", body = ApiResponse<Vec<InitiativeListItemDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_initiatives(
    State(state): State<AppState>,
    Query(query): Query<InitiativeFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let initiatives = InitiativeService::new(&state.db)
        .list(&InitiativeFilter::from_query(query))
        .await?;

    Ok(Json(ApiResponse::list(
        initiatives
            .into_iter()
            .map(Initiative::into_list_item_dto)
            .collect(),
    )))
}

/// List the caller's own initiatives.
#[utoipa::path(
    get,
    path = "/api/private/my-initiatives",
    tag = INITIATIVE_TAG,
    responses(
        (status = 200, description = "Caller's initiatives", body = ApiResponse<Vec<InitiativeListItemDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_initiatives(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let initiatives = InitiativeService::new(&state.db).list_mine(&user).await?;

    Ok(Json(ApiResponse::list(
        initiatives
            .into_iter()
            .map(Initiative::into_list_item_dto)
            .collect(),
    )))
}

/// List initiatives waiting for review.
///
/// # Access Control
/// - Admins and managers
#[utoipa::path(
    get,
    path = "/api/private/initiatives/submitted",
    tag = INITIATIVE_TAG,
    responses(
        (status = 200, description = "Submitted initiatives", body = ApiResponse<Vec<InitiativeListItemDto>>),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_submitted_initiatives(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let initiatives = InitiativeService::new(&state.db)
        .list_submitted(&user)
        .await?;

    Ok(Json(ApiResponse::list(
        initiatives
            .into_iter()
            .map(Initiative::into_list_item_dto)
            .collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/private/initiatives/{id}",
    tag = INITIATIVE_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    responses(
        (status = 200, description = "Initiative", body = ApiResponse<InitiativeDto>),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_initiative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let initiative = InitiativeService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(initiative.into_dto())))
}

/// Edit an initiative.
///
/// # Access Control
/// - Owner of the initiative or an admin
///
/// # Returns
/// - `200 OK` - Updated initiative
/// - `400 Bad Request` - Invalid field values
/// - `403 Forbidden` - Caller is neither owner nor admin
/// - `404 Not Found` - No initiative with that ID
#[utoipa::path(
    put,
    path = "/api/private/initiatives/{id}",
    tag = INITIATIVE_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    request_body = UpdateInitiativeDto,
    responses(
        (status = 200, description = "Initiative updated", body = ApiResponse<InitiativeDto>),
        (status = 400, description = "Invalid initiative data", body = ErrorDto),
        (status = 403, description = "Caller may not edit this initiative", body = ErrorDto),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_initiative(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInitiativeDto>,
) -> Result<impl IntoResponse, AppError> {
    let initiative = InitiativeService::new(&state.db)
        .update(id, &user, UpdateInitiativeParam::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Iniciativa atualizada com sucesso",
        initiative.into_dto(),
    )))
}

/// Delete an initiative. Owner or admin only.
#[utoipa::path(
    delete,
    path = "/api/private/initiatives/{id}",
    tag = INITIATIVE_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    responses(
        (status = 200, description = "Initiative deleted", body = MessageResponse),
        (status = 403, description = "Caller may not delete this initiative", body = ErrorDto),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_initiative(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    InitiativeService::new(&state.db).delete(id, &user).await?;

    Ok(Json(MessageResponse::new("Iniciativa deletada com sucesso")))
}

/// Approve or reject a submitted initiative.
///
/// # Access Control
/// - Admins and managers
///
/// # Returns
/// - `200 OK` - Initiative moved to `Aprovada` or `Reprovada`
/// - `400 Bad Request` - Reason shorter than 10 characters or initiative not `Submetida`
/// - `403 Forbidden` - Caller is neither admin nor manager
/// - `404 Not Found` - No initiative with that ID
#[utoipa::path(
    post,
    path = "/api/private/initiatives/{id}/review",
    tag = INITIATIVE_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Initiative reviewed", body = MessageResponse),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_initiative(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReviewParam::from_dto(payload);
    let message = if param.approved {
        "Iniciativa aprovada com sucesso"
    } else {
        "Iniciativa reprovada com sucesso"
    };

    InitiativeService::new(&state.db)
        .review(id, &user, param)
        .await?;

    Ok(Json(MessageResponse::new(message)))
}

/// Set an initiative's status directly.
///
/// # Access Control
/// - Admins only
#[utoipa::path(
    patch,
    path = "/api/private/initiatives/{id}/status",
    tag = INITIATIVE_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    request_body = ChangeStatusDto,
    responses(
        (status = 200, description = "Status changed", body = MessageResponse),
        (status = 400, description = "Unknown status or reason too short", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_initiative_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    InitiativeService::new(&state.db)
        .change_status(id, &user, ChangeStatusParam::from_dto(payload))
        .await?;

    Ok(Json(MessageResponse::new("Status alterado com sucesso")))
}

/// Get an initiative's status history, newest first.
#[utoipa::path(
    get,
    path = "/api/private/initiatives/{id}/history",
    tag = INITIATIVE_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    responses(
        (status = 200, description = "History entries", body = ApiResponse<Vec<HistoryDto>>),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_initiative_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entries = HistoryService::new(&state.db).get_by_initiative(id).await?;

    let now = Utc::now();
    Ok(Json(ApiResponse::list(
        entries.into_iter().map(|e| e.into_dto(now)).collect(),
    )))
}
