use axum::{
    body::to_bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::{SecuritySettings, Settings},
    data::user::UserRepository,
    error::AppError,
    extract::{Json, Path, Query},
    middleware::auth::CurrentUser,
    state::AppState,
};

mod auth;
mod router;
mod sector;

fn test_state(db: &DatabaseConnection) -> AppState {
    let settings = Settings {
        security: SecuritySettings {
            cookie_encryption_key: "controller-tests-cookie-key-0123456789".to_string(),
            cookie_http_only: true,
            ..Default::default()
        },
        ..Default::default()
    };

    AppState::new(db.clone(), reqwest::Client::new(), settings)
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn current_user(db: &DatabaseConnection, role: &str) -> Result<CurrentUser, AppError> {
    let (user, _) = factory::create_user_with_role(db, role).await?;
    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

    Ok(CurrentUser(user))
}
