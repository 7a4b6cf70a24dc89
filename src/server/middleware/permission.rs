use axum::{
    extract::{FromRequestParts, OriginalUri, Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::CurrentUser,
    service::permission::PermissionService,
    state::AppState,
};

/// Authenticates the caller and checks their roles grant the requested route.
///
/// Applied to every `/api/private` route. Denies when no permission row matches and also when
/// the permission lookup itself fails. On success the resolved `CurrentUser` is stored in the
/// request extensions for the handler.
///
/// # Returns
/// - `Ok(Response)` - Handler response
/// - `Err(AppError::AuthErr)` - 401 when unauthenticated, 403 when access is denied
pub async fn require_permission(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let user = CurrentUser::from_request_parts(&mut parts, &state).await?;

    let path = parts
        .extensions
        .get::<OriginalUri>()
        .map(|uri| uri.0.path().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    let method = parts.method.as_str().to_string();

    let allowed = match PermissionService::new(&state.db)
        .has_permission(user.0.id, &path, &method)
        .await
    {
        Ok(allowed) => allowed,
        Err(err) => {
            tracing::error!(
                "Permission lookup failed for user {} on {} {}: {}",
                user.0.id,
                method,
                path,
                err
            );
            false
        }
    };

    if !allowed {
        return Err(AuthError::AccessDenied {
            user_id: user.0.id,
            method,
            path,
        }
        .into());
    }

    parts.extensions.insert(user);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
