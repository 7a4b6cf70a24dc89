use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Datelike, Utc};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse, ReviewDto},
        prioritization::{
            AllPrioritizationsDto, ChangeRequestDto, PrioritizationDto, RequestChangeDto,
            SavePrioritizationDto, YearQuery,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::CurrentUser,
        model::{
            prioritization::{RequestChangeParam, SavePrioritizationParam},
            review::ReviewParam,
        },
        service::prioritization::PrioritizationService,
        state::AppState,
    },
};

/// Tag for grouping prioritization endpoints in OpenAPI documentation
pub static PRIORITIZATION_TAG: &str = "prioritization";

fn year_or_current(query: &YearQuery) -> i32 {
    query.year.unwrap_or_else(|| Utc::now().year())
}

/// Get the caller's sector ranking for a year.
///
/// Without a saved ranking, returns an unlocked view listing the sector's prioritizable
/// initiatives.
///
/// # Arguments
/// - `year` - Query parameter, defaults to the current year
#[utoipa::path(
    get,
    path = "/api/private/prioritization",
    tag = PRIORITIZATION_TAG,
    params(YearQuery),
    responses(
        (status = 200, description = "Sector ranking", body = ApiResponse<PrioritizationDto>),
        (status = 400, description = "Caller has no sector", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prioritization(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<YearQuery>,
) -> Result<impl IntoResponse, AppError> {
    let view = PrioritizationService::new(&state.db)
        .get(&user, year_or_current(&query))
        .await?;

    Ok(Json(ApiResponse::data(view.into_dto())))
}

/// Save the caller's sector ranking and lock it.
///
/// # Access Control
/// - Any sector member while unlocked
/// - Admins and managers at any time
///
/// # Returns
/// - `201 Created` - Ranking saved and locked
/// - `400 Bad Request` - Invalid year, empty order, caller without sector, or ranking locked
#[utoipa::path(
    post,
    path = "/api/private/prioritization",
    tag = PRIORITIZATION_TAG,
    request_body = SavePrioritizationDto,
    responses(
        (status = 201, description = "Ranking saved", body = ApiResponse<PrioritizationDto>),
        (status = 400, description = "Ranking rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_prioritization(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<SavePrioritizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let view = PrioritizationService::new(&state.db)
        .save(&user, SavePrioritizationParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Priorização salva com sucesso",
            view.into_dto(),
        )),
    ))
}

/// Get every sector's ranking for a year.
///
/// # Access Control
/// - Admins and managers
#[utoipa::path(
    get,
    path = "/api/private/prioritization/all",
    tag = PRIORITIZATION_TAG,
    params(YearQuery),
    responses(
        (status = 200, description = "Rankings by sector", body = ApiResponse<AllPrioritizationsDto>),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_prioritizations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<YearQuery>,
) -> Result<impl IntoResponse, AppError> {
    let all = PrioritizationService::new(&state.db)
        .get_all(&user, year_or_current(&query))
        .await?;

    Ok(Json(ApiResponse::data(all.into_dto())))
}

/// Request a change to the caller's locked sector ranking.
///
/// # Arguments
/// - `year` - Query parameter selecting the ranking, defaults to the current year
///
/// # Returns
/// - `201 Created` - Change request filed as `Pendente`
/// - `400 Bad Request` - Reason shorter than 10 characters, empty order, or a request is
///   already pending
/// - `404 Not Found` - No ranking saved for that year
#[utoipa::path(
    post,
    path = "/api/private/prioritization/request-change",
    tag = PRIORITIZATION_TAG,
    params(YearQuery),
    request_body = RequestChangeDto,
    responses(
        (status = 201, description = "Change requested", body = ApiResponse<ChangeRequestDto>),
        (status = 400, description = "Request rejected", body = ErrorDto),
        (status = 404, description = "No ranking for that year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_prioritization_change(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<YearQuery>,
    Json(payload): Json<RequestChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RequestChangeParam::from_dto(year_or_current(&query), payload);
    let request = PrioritizationService::new(&state.db)
        .request_change(&user, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Solicitação de mudança criada com sucesso",
            request.into_dto(Utc::now()),
        )),
    ))
}

/// List pending ranking change requests, newest first.
#[utoipa::path(
    get,
    path = "/api/private/prioritization/change-requests",
    tag = PRIORITIZATION_TAG,
    responses(
        (status = 200, description = "Pending change requests", body = ApiResponse<Vec<ChangeRequestDto>>),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_change_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let requests = PrioritizationService::new(&state.db)
        .list_pending_change_requests(&user)
        .await?;

    let now = Utc::now();
    Ok(Json(ApiResponse::list(
        requests.into_iter().map(|r| r.into_dto(now)).collect(),
    )))
}

/// Approve or reject a ranking change request.
///
/// Approval unlocks the ranking so the sector can save a new order.
#[utoipa::path(
    post,
    path = "/api/private/prioritization/change-requests/{id}/review",
    tag = PRIORITIZATION_TAG,
    params(("id" = i32, Path, description = "Change request ID")),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Change request reviewed", body = MessageResponse),
        (status = 400, description = "Reason too short or request already reviewed", body = ErrorDto),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Change request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_change_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReviewParam::from_dto(payload);
    let message = if param.approved {
        "Solicitação de mudança aprovada e a priorização foi desbloqueada para alteração"
    } else {
        "Solicitação de mudança reprovada"
    };

    PrioritizationService::new(&state.db)
        .review_change(id, &user, param)
        .await?;

    Ok(Json(MessageResponse::new(message)))
}
