use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        sector::{CreateSectorDto, SectorDto, SectorListItemDto, SectorListQuery, UpdateSectorDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::sector::{CreateSectorParam, SectorWithUserCount, UpdateSectorParam},
        service::sector::SectorService,
        state::AppState,
    },
};

/// Tag for grouping sector endpoints in OpenAPI documentation
pub static SECTOR_TAG: &str = "sector";

/// Create a sector.
///
/// The name is trimmed and must have at least 3 characters and be unique. `active` defaults
/// to true.
///
/// # Returns
/// - `201 Created` - Sector created
/// - `400 Bad Request` - Name too short or already taken
#[utoipa::path(
    post,
    path = "/api/private/sectors",
    tag = SECTOR_TAG,
    request_body = CreateSectorDto,
    responses(
        (status = 201, description = "Sector created", body = ApiResponse<SectorDto>),
        (status = 400, description = "Invalid sector data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sector(
    State(state): State<AppState>,
    Json(payload): Json<CreateSectorDto>,
) -> Result<impl IntoResponse, AppError> {
    let sector = SectorService::new(&state.db)
        .create(CreateSectorParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Setor criado com sucesso",
            sector.into_dto(),
        )),
    ))
}

/// List sectors ordered by name with their linked user counts.
#[utoipa::path(
    get,
    path = "/api/private/sectors",
    tag = SECTOR_TAG,
    params(SectorListQuery),
    responses(
        (status = 200, description = "Sectors", body = ApiResponse<Vec<SectorListItemDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sectors(
    State(state): State<AppState>,
    Query(query): Query<SectorListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sectors = SectorService::new(&state.db)
        .list(query.active_only)
        .await?;

    Ok(Json(ApiResponse::list(
        sectors
            .into_iter()
            .map(SectorWithUserCount::into_dto)
            .collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/private/sectors/{id}",
    tag = SECTOR_TAG,
    params(("id" = i32, Path, description = "Sector ID")),
    responses(
        (status = 200, description = "Sector", body = ApiResponse<SectorDto>),
        (status = 404, description = "Sector not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sector(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sector = SectorService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(sector.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/private/sectors/{id}",
    tag = SECTOR_TAG,
    params(("id" = i32, Path, description = "Sector ID")),
    request_body = UpdateSectorDto,
    responses(
        (status = 200, description = "Sector updated", body = ApiResponse<SectorDto>),
        (status = 400, description = "Invalid sector data", body = ErrorDto),
        (status = 404, description = "Sector not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sector(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSectorDto>,
) -> Result<impl IntoResponse, AppError> {
    let sector = SectorService::new(&state.db)
        .update(id, UpdateSectorParam::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Setor atualizado com sucesso",
        sector.into_dto(),
    )))
}

/// Delete a sector.
///
/// Refused while users are linked to it; the error message carries the user count.
#[utoipa::path(
    delete,
    path = "/api/private/sectors/{id}",
    tag = SECTOR_TAG,
    params(("id" = i32, Path, description = "Sector ID")),
    responses(
        (status = 200, description = "Sector deleted", body = MessageResponse),
        (status = 400, description = "Users still linked", body = ErrorDto),
        (status = 404, description = "Sector not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sector(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SectorService::new(&state.db).delete(id).await?;

    Ok(Json(MessageResponse::new("Setor deletado com sucesso")))
}
