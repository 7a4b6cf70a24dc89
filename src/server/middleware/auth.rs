//! Cookie-based authentication.
//!
//! The `auth_token` cookie holds the user ID, encrypted and authenticated with the private
//! cookie jar. Handlers receive the caller as an explicit `CurrentUser` argument.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use cookie::{Cookie, CookieJar, Key, SameSite};

use crate::server::{
    config::SecuritySettings,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AppState,
};

pub const AUTH_COOKIE: &str = "auth_token";
const AUTH_COOKIE_HOURS: i64 = 24;

/// Authenticated caller, loaded fresh from the database with roles and sector.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

fn base_cookie(security: &SecuritySettings, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::build((AUTH_COOKIE, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(security.cookie_secure)
        .http_only(security.cookie_http_only)
        .build();

    if !security.cookie_domain.is_empty() {
        cookie.set_domain(security.cookie_domain.clone());
    }

    cookie
}

/// Builds the `Set-Cookie` value carrying the encrypted user ID, valid for 24 hours.
pub fn build_auth_cookie(key: &Key, security: &SecuritySettings, user_id: i32) -> String {
    let mut cookie = base_cookie(security, user_id.to_string());
    cookie.set_max_age(time::Duration::hours(AUTH_COOKIE_HOURS));

    let mut jar = CookieJar::new();
    jar.private_mut(key).add(cookie);

    jar.get(AUTH_COOKIE)
        .map(|c| c.to_string())
        .unwrap_or_default()
}

/// Builds the `Set-Cookie` value that expires the authentication cookie.
pub fn clear_auth_cookie(security: &SecuritySettings) -> String {
    let mut cookie = base_cookie(security, String::new());
    cookie.make_removal();

    cookie.to_string()
}

/// Decrypts the user ID from the request's `auth_token` cookie.
///
/// # Returns
/// - `Ok(i32)` - User ID stored in the cookie
/// - `Err(AuthError::MissingToken)` - No `auth_token` cookie
/// - `Err(AuthError::InvalidToken)` - Cookie tampered with, encrypted under another key, or
///   not holding a number
pub fn read_user_id(headers: &HeaderMap, key: &Key) -> Result<i32, AuthError> {
    let mut jar = CookieJar::new();
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else {
            continue;
        };
        for cookie in Cookie::split_parse(raw.to_string()).flatten() {
            jar.add_original(cookie);
        }
    }

    if jar.get(AUTH_COOKIE).is_none() {
        return Err(AuthError::MissingToken);
    }

    let cookie = jar
        .private(key)
        .get(AUTH_COOKIE)
        .ok_or(AuthError::InvalidToken)?;

    cookie.value().parse().map_err(|_| AuthError::InvalidToken)
}

/// Resolves the caller from the auth cookie.
///
/// Reuses the user already resolved by the permission middleware when present.
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user_id = read_user_id(&parts.headers, &state.cookie_key)?;

        let user = UserRepository::new(&state.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(CurrentUser(user))
    }
}
