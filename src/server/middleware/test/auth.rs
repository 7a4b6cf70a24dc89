use super::*;

#[test]
fn cookie_round_trips_user_id() {
    let key = Key::derive_from(COOKIE_KEY.as_bytes());

    let set_cookie = build_auth_cookie(&key, &security(), 42);

    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert_eq!(read_user_id(&request_headers(&set_cookie), &key).unwrap(), 42);
}

#[test]
fn cookie_value_is_not_plain_user_id() {
    let key = Key::derive_from(COOKIE_KEY.as_bytes());

    let set_cookie = build_auth_cookie(&key, &security(), 42);

    assert_ne!(set_cookie.split(';').next(), Some("auth_token=42"));
}

#[test]
fn missing_cookie_is_reported() {
    let key = Key::derive_from(COOKIE_KEY.as_bytes());

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));

    assert!(matches!(
        read_user_id(&headers, &key),
        Err(AuthError::MissingToken)
    ));
    assert!(matches!(
        read_user_id(&HeaderMap::new(), &key),
        Err(AuthError::MissingToken)
    ));
}

#[test]
fn tampered_or_foreign_cookie_is_invalid() {
    let key = Key::derive_from(COOKIE_KEY.as_bytes());
    let other_key = Key::derive_from(b"another-key-that-is-long-enough-to-use");

    let plain = request_headers("auth_token=42");
    let foreign = request_headers(&build_auth_cookie(&other_key, &security(), 42));

    assert!(matches!(
        read_user_id(&plain, &key),
        Err(AuthError::InvalidToken)
    ));
    assert!(matches!(
        read_user_id(&foreign, &key),
        Err(AuthError::InvalidToken)
    ));
}

#[test]
fn clear_cookie_expires_immediately() {
    let set_cookie = clear_auth_cookie(&security());

    assert!(set_cookie.starts_with("auth_token=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

/// Expected: CurrentUser loaded with roles from the cookie's user ID
#[tokio::test]
async fn extracts_current_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_user_with_role(db, "manager").await?;
    let state = test_state(db);

    let mut parts = request_parts(request_headers(&build_auth_cookie(
        &state.cookie_key,
        &state.settings.security,
        user.id,
    )));
    let CurrentUser(current) = CurrentUser::from_request_parts(&mut parts, &state).await?;

    assert_eq!(current.id, user.id);
    assert!(current.is_admin_or_manager());

    Ok(())
}

/// Expected: 401 variant when the cookie names a deleted user
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = test_state(db);

    let mut parts = request_parts(request_headers(&build_auth_cookie(
        &state.cookie_key,
        &state.settings.security,
        777,
    )));
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(777)))
    ));

    Ok(())
}

/// Expected: user already stored in extensions is reused without a cookie
#[tokio::test]
async fn reuses_user_from_extensions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let state = test_state(db);
    let loaded = crate::server::data::user::UserRepository::new(db)
        .find_by_id(user.id)
        .await?
        .unwrap();

    let mut parts = request_parts(HeaderMap::new());
    parts.extensions.insert(CurrentUser(loaded));
    let CurrentUser(current) = CurrentUser::from_request_parts(&mut parts, &state).await?;

    assert_eq!(current.id, user.id);

    Ok(())
}
