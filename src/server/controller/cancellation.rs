use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse, ReviewDto},
        cancellation::{CancellationRequestDto, RequestCancellationDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::CurrentUser,
        model::review::ReviewParam,
        service::cancellation::CancellationService,
        state::AppState,
    },
};

/// Tag for grouping cancellation request endpoints in OpenAPI documentation
pub static CANCELLATION_TAG: &str = "cancellation";

/// Ask for an initiative to be cancelled.
///
/// Only one request per initiative may be pending at a time.
///
/// # Returns
/// - `201 Created` - Request filed as `Pendente`
/// - `400 Bad Request` - Reason shorter than 10 characters, initiative already cancelled,
///   or a request is already pending
/// - `404 Not Found` - No initiative with that ID
#[utoipa::path(
    post,
    path = "/api/private/initiatives/{id}/cancellation",
    tag = CANCELLATION_TAG,
    params(("id" = i32, Path, description = "Initiative ID")),
    request_body = RequestCancellationDto,
    responses(
        (status = 201, description = "Cancellation requested", body = ApiResponse<CancellationRequestDto>),
        (status = 400, description = "Request rejected", body = ErrorDto),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_cancellation(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(initiative_id): Path<i32>,
    Json(payload): Json<RequestCancellationDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = CancellationService::new(&state.db)
        .request(initiative_id, &user, &payload.reason)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Solicitação de cancelamento criada com sucesso",
            request.into_dto(Utc::now()),
        )),
    ))
}

/// List pending cancellation requests, newest first.
///
/// # Access Control
/// - Admins and managers
#[utoipa::path(
    get,
    path = "/api/private/cancellation-requests",
    tag = CANCELLATION_TAG,
    responses(
        (status = 200, description = "Pending requests", body = ApiResponse<Vec<CancellationRequestDto>>),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cancellation_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let requests = CancellationService::new(&state.db)
        .list_pending(&user)
        .await?;

    let now = Utc::now();
    Ok(Json(ApiResponse::list(
        requests.into_iter().map(|r| r.into_dto(now)).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/private/cancellation-requests/{id}",
    tag = CANCELLATION_TAG,
    params(("id" = i32, Path, description = "Cancellation request ID")),
    responses(
        (status = 200, description = "Cancellation request", body = ApiResponse<CancellationRequestDto>),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cancellation_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = CancellationService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(request.into_dto(Utc::now()))))
}

/// Approve or reject a pending cancellation request.
///
/// Approval moves the initiative to `Cancelada`.
///
/// # Access Control
/// - Admins and managers
#[utoipa::path(
    post,
    path = "/api/private/cancellation-requests/{id}/review",
    tag = CANCELLATION_TAG,
    params(("id" = i32, Path, description = "Cancellation request ID")),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request reviewed", body = MessageResponse),
        (status = 400, description = "Reason too short or request already reviewed", body = ErrorDto),
        (status = 403, description = "Caller is neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_cancellation_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReviewParam::from_dto(payload);
    let message = if param.approved {
        "Solicitação de cancelamento aprovada e a iniciativa foi cancelada"
    } else {
        "Solicitação de cancelamento reprovada"
    };

    CancellationService::new(&state.db)
        .review(id, &user, param)
        .await?;

    Ok(Json(MessageResponse::new(message)))
}
