use axum::http::header::SET_COOKIE;

use super::*;
use crate::{
    model::{auth::LoginDto, user::CreateUserDto},
    server::controller::{
        auth::{health, login, logout, me},
        user::create_user,
    },
};

async fn register(state: &AppState) {
    let response = create_user(
        State(state.clone()),
        Json(CreateUserDto {
            email: "lara@example.com".to_string(),
            name: "Lara Souza".to_string(),
            password: "segredo123".to_string(),
            sector_id: None,
            type_ids: Vec::new(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Expected: encrypted cookie set and user envelope without password hash
#[tokio::test]
async fn login_sets_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = test_state(db);
    register(&state).await;

    let response = login(
        State(state),
        Json(LoginDto {
            email: "lara@example.com".to_string(),
            password: "segredo123".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("auth_token="));

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["email"], json!("lara@example.com"));
    assert!(body["user"].get("password_hash").is_none());

    Ok(())
}

/// Expected: 401 with the generic credentials message
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = test_state(db);
    register(&state).await;

    let response = login(
        State(state),
        Json(LoginDto {
            email: "lara@example.com".to_string(),
            password: "errada".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "error": "credenciais inválidas", "code": 401})
    );

    Ok(())
}

/// Expected: removal cookie and confirmation message
#[tokio::test]
async fn logout_clears_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = logout(State(test_state(db))).await.into_response();

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(
        body_json(response).await["message"],
        json!("Logout realizado com sucesso")
    );

    Ok(())
}

/// Expected: caller returned in the user envelope
#[tokio::test]
async fn me_returns_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = current_user(db, "admin").await?;
    let id = caller.0.id;

    let body = body_json(me(caller).await.into_response()).await;

    assert_eq!(body["user"]["id"], json!(id));
    assert_eq!(body["user"]["user_types"][0]["name"], json!("admin"));

    Ok(())
}

#[tokio::test]
async fn health_reports_database() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = health(State(test_state(db))).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"success": true, "status": "ok", "database": "ok"})
    );
}
