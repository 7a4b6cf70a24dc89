use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        ai::{RefineTextDto, RefinedTextDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError, extract::Json, model::ai::RefineTextParam, service::ai::AiService,
        state::AppState,
    },
};

/// Tag for grouping text generation endpoints in OpenAPI documentation
pub static AI_TAG: &str = "ai";

/// Summarize, refine or expand a text with the configured Gemini model.
///
/// # Returns
/// - `200 OK` - Generated text
/// - `400 Bad Request` - Empty or too long text, prompt too short
/// - `502 Bad Gateway` - Provider failed or returned no text
/// - `503 Service Unavailable` - No API key configured
#[utoipa::path(
    post,
    path = "/api/private/ai/refine-text",
    tag = AI_TAG,
    request_body = RefineTextDto,
    responses(
        (status = 200, description = "Generated text", body = ApiResponse<RefinedTextDto>),
        (status = 400, description = "Invalid text or prompt", body = ErrorDto),
        (status = 502, description = "Provider error", body = ErrorDto),
        (status = 503, description = "Text generation disabled", body = ErrorDto)
    ),
)]
pub async fn refine_text(
    State(state): State<AppState>,
    Json(payload): Json<RefineTextDto>,
) -> Result<impl IntoResponse, AppError> {
    let refined = AiService::new(&state.http_client, &state.settings.ai)
        .refine_text(RefineTextParam::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::data(refined.into_dto())))
}
