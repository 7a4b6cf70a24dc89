use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap, HeaderValue, Request},
};
use cookie::Key;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::{SecuritySettings, Settings},
    error::{auth::AuthError, AppError},
    middleware::auth::{build_auth_cookie, clear_auth_cookie, read_user_id, CurrentUser},
    state::AppState,
};

mod auth;

const COOKIE_KEY: &str = "0123456789abcdef0123456789abcdef-test";

fn security() -> SecuritySettings {
    SecuritySettings {
        cookie_encryption_key: COOKIE_KEY.to_string(),
        cookie_http_only: true,
        ..Default::default()
    }
}

fn test_state(db: &DatabaseConnection) -> AppState {
    let settings = Settings {
        security: security(),
        ..Default::default()
    };

    AppState::new(db.clone(), reqwest::Client::new(), settings)
}

/// Turns a `Set-Cookie` value into the `Cookie` request header a browser would send back.
fn request_headers(set_cookie: &str) -> HeaderMap {
    let pair = set_cookie.split(';').next().unwrap_or_default();

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());
    headers
}

fn request_parts(headers: HeaderMap) -> Parts {
    let mut request = Request::new(());
    *request.headers_mut() = headers;
    request.into_parts().0
}
