use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        comment::{CommentContentDto, CommentDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::CurrentUser,
        model::comment::Comment,
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List an initiative's comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/private/initiatives/{initiativeId}/comments",
    tag = COMMENT_TAG,
    params(("initiativeId" = i32, Path, description = "Initiative ID")),
    responses(
        (status = 200, description = "Comments", body = ApiResponse<Vec<CommentDto>>),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(initiative_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_by_initiative(initiative_id)
        .await?;

    Ok(Json(ApiResponse::list(
        comments.into_iter().map(Comment::into_dto).collect(),
    )))
}

/// Comment on an initiative.
///
/// Content is trimmed and must be between 3 and 1000 characters.
#[utoipa::path(
    post,
    path = "/api/private/initiatives/{initiativeId}/comments",
    tag = COMMENT_TAG,
    params(("initiativeId" = i32, Path, description = "Initiative ID")),
    request_body = CommentContentDto,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentDto>),
        (status = 400, description = "Content too short or too long", body = ErrorDto),
        (status = 404, description = "Initiative not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(initiative_id): Path<i32>,
    Json(payload): Json<CommentContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .create(initiative_id, &user, &payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Comentário criado com sucesso",
            comment.into_dto(),
        )),
    ))
}

/// Edit a comment. Author only.
#[utoipa::path(
    put,
    path = "/api/private/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = CommentContentDto,
    responses(
        (status = 200, description = "Comment updated", body = ApiResponse<CommentDto>),
        (status = 400, description = "Content too short or too long", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<CommentContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .update(id, &user, &payload.content)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Comentário atualizado com sucesso",
        comment.into_dto(),
    )))
}

/// Delete a comment. Author or admin.
#[utoipa::path(
    delete,
    path = "/api/private/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 403, description = "Caller is neither author nor admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db).delete(id, &user).await?;

    Ok(Json(MessageResponse::new("Comentário deletado com sucesso")))
}
