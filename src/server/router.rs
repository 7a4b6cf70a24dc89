use axum::{middleware::from_fn_with_state, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        ai::{self, AI_TAG},
        auth::{self, AUTH_TAG},
        cancellation::{self, CANCELLATION_TAG},
        comment::{self, COMMENT_TAG},
        initiative::{self, INITIATIVE_TAG},
        permission::{self, PERMISSION_TAG},
        prioritization::{self, PRIORITIZATION_TAG},
        sector::{self, SECTOR_TAG},
        user::{self, USER_TAG},
    },
    middleware::permission::require_permission,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Initiatives API",
        description = "Submission, review and yearly prioritization of improvement initiatives"
    ),
    tags(
        (name = AUTH_TAG, description = "Login, logout and session"),
        (name = USER_TAG, description = "User administration"),
        (name = PERMISSION_TAG, description = "Roles and profile"),
        (name = SECTOR_TAG, description = "Sectors"),
        (name = INITIATIVE_TAG, description = "Initiatives, review and history"),
        (name = COMMENT_TAG, description = "Initiative comments"),
        (name = CANCELLATION_TAG, description = "Cancellation requests"),
        (name = PRIORITIZATION_TAG, description = "Yearly sector rankings and change requests"),
        (name = AI_TAG, description = "Text generation"),
    )
)]
struct ApiDoc;

/// Builds the complete application router.
///
/// Public routes (`/api/login`, `/api/logout`, `/api/health`) need no session. Every route
/// under `/api/private` goes through `require_permission`, which authenticates the caller
/// from the `auth_token` cookie and checks the route against the caller's role permissions.
/// The generated OpenAPI document is served with Swagger UI at `/api/docs`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors` - CORS policy built from settings
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let public = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::health));

    let private = OpenApiRouter::new()
        .routes(routes!(auth::me))
        .routes(routes!(user::change_password))
        .routes(routes!(user::list_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(permission::get_personal_information))
        .routes(routes!(permission::list_user_types))
        .routes(routes!(
            permission::assign_user_type,
            permission::remove_user_type
        ))
        .routes(routes!(sector::list_sectors, sector::create_sector))
        .routes(routes!(
            sector::get_sector,
            sector::update_sector,
            sector::delete_sector
        ))
        .routes(routes!(
            initiative::list_initiatives,
            initiative::create_initiative
        ))
        .routes(routes!(initiative::list_my_initiatives))
        .routes(routes!(initiative::list_submitted_initiatives))
        .routes(routes!(
            initiative::get_initiative,
            initiative::update_initiative,
            initiative::delete_initiative
        ))
        .routes(routes!(initiative::review_initiative))
        .routes(routes!(initiative::change_initiative_status))
        .routes(routes!(initiative::get_initiative_history))
        .routes(routes!(comment::list_comments, comment::create_comment))
        .routes(routes!(comment::update_comment, comment::delete_comment))
        .routes(routes!(cancellation::request_cancellation))
        .routes(routes!(cancellation::list_cancellation_requests))
        .routes(routes!(cancellation::get_cancellation_request))
        .routes(routes!(cancellation::review_cancellation_request))
        .routes(routes!(
            prioritization::get_prioritization,
            prioritization::save_prioritization
        ))
        .routes(routes!(prioritization::get_all_prioritizations))
        .routes(routes!(prioritization::request_prioritization_change))
        .routes(routes!(prioritization::list_change_requests))
        .routes(routes!(prioritization::review_change_request))
        .routes(routes!(ai::refine_text))
        .route_layer(from_fn_with_state(state.clone(), require_permission));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(public)
        .merge(private)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
