use super::*;

/// Expected: Some with roles attached
#[tokio::test]
async fn finds_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, user_type) = factory::create_user_with_role(db, "manager").await?;

    let found = UserRepository::new(db).find_by_email(&user.email).await?;

    let found = found.expect("user should exist");
    assert_eq!(found.id, user.id);
    assert_eq!(found.user_types.len(), 1);
    assert_eq!(found.user_types[0].id, user_type.id);
    assert_eq!(found.user_types[0].name, "manager");

    Ok(())
}

/// Expected: None for an unknown email
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
