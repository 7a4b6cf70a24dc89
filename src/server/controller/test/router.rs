use reqwest::header::COOKIE;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use super::*;
use crate::server::{middleware::auth::build_auth_cookie, router::router};

/// Serves the full router on an ephemeral port and returns its base URL.
async fn serve(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state, CorsLayer::new());

    tokio::spawn(async move { axum::serve(listener, app).await });

    format!("http://{}", addr)
}

/// Cookie header value for a user holding `role` with `endpoint`/`method` granted.
async fn session(
    state: &AppState,
    role: &str,
    endpoint: &str,
    method: &str,
) -> Result<String, AppError> {
    let (user, user_type) = factory::create_user_with_role(&state.db, role).await?;
    factory::grant_permission(&state.db, user_type.id, endpoint, method).await?;

    let set_cookie = build_auth_cookie(&state.cookie_key, &state.settings.security, user.id);
    let pair = set_cookie.split(';').next().unwrap_or_default();

    Ok(pair.to_string())
}

async fn error_body(response: reqwest::Response) -> (StatusCode, Value) {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json::<Value>().await.unwrap();

    (status, body)
}

/// Expected: 400 envelope instead of a plain-text 422 when a login field has the wrong type
#[tokio::test]
async fn login_with_mistyped_field_returns_envelope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let base = serve(test_state(db)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/login", base))
        .json(&json!({ "email": 5 }))
        .send()
        .await?;

    let (status, body) = error_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Payload inválido", "code": 400 })
    );

    Ok(())
}

/// Expected: 400 envelope when the body is not JSON at all
#[tokio::test]
async fn login_with_malformed_body_returns_envelope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let base = serve(test_state(db)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/login", base))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"email\":")
        .send()
        .await?;

    let (status, body) = error_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Payload inválido"));

    Ok(())
}

/// Expected: 400 envelope when a numeric path segment does not parse
#[tokio::test]
async fn non_numeric_id_returns_envelope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = test_state(db);
    let cookie = session(&state, "admin", "/api/private/sectors/{id}", "GET").await?;
    let base = serve(state).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/private/sectors/abc", base))
        .header(COOKIE, cookie)
        .send()
        .await?;

    let (status, body) = error_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "ID inválido", "code": 400 })
    );

    Ok(())
}

/// Expected: 400 envelope for an unknown text generation action, before any outbound call
#[tokio::test]
async fn unknown_ai_action_returns_envelope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = test_state(db);
    let cookie = session(&state, "user", "/api/private/ai/refine-text", "POST").await?;
    let base = serve(state).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/private/ai/refine-text", base))
        .header(COOKIE, cookie)
        .json(&json!({ "text": "Melhorar o fluxo de compras", "action": "translate" }))
        .send()
        .await?;

    let (status, body) = error_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Payload inválido"));

    Ok(())
}

/// Expected: 401 envelope when a private route is called without the session cookie
#[tokio::test]
async fn private_route_without_cookie_is_unauthorized() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let base = serve(test_state(db)).await;

    let response = reqwest::get(format!("{}/api/private/sectors", base)).await?;

    let (status, body) = error_body(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!(401));

    Ok(())
}
