use super::*;
use crate::server::{
    error::auth::AuthError, model::user::CreateUserParam, service::auth::AuthService,
    service::user::UserService,
};

async fn create_account(db: &DatabaseConnection) -> Result<User, AppError> {
    UserService::new(db)
        .create(CreateUserParam {
            email: "helena@example.com".to_string(),
            name: "Helena".to_string(),
            password: "segredo123".to_string(),
            sector_id: None,
            type_ids: Vec::new(),
        })
        .await
}

/// Expected: Ok with the account for the right password
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let account = create_account(db).await?;

    let user = AuthService::new(db)
        .login("helena@example.com", "segredo123")
        .await?;

    assert_eq!(user.id, account.id);

    Ok(())
}

/// Expected: InvalidCredentials for wrong password and unknown email alike
#[tokio::test]
async fn rejects_wrong_password_and_unknown_email() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    create_account(db).await?;

    let service = AuthService::new(db);
    let wrong_password = service.login("helena@example.com", "errada").await;
    let unknown = service.login("ninguem@example.com", "segredo123").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Expected: BadRequest when either field is blank
#[tokio::test]
async fn requires_email_and_password() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login("  ", "segredo123").await;

    assert_bad_request(result, "Email e senha são obrigatórios");

    Ok(())
}
