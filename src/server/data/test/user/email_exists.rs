use super::*;

/// Expected: true for a taken email, false when the only match is excluded
#[tokio::test]
async fn honours_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("taken@example.com", None).await?);
    assert!(!repo.email_exists("taken@example.com", Some(user.id)).await?);
    assert!(!repo.email_exists("free@example.com", None).await?);

    Ok(())
}
