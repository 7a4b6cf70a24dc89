use super::*;

fn new_user(email: &str, sector_id: Option<i32>) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Ana Souza".to_string(),
        password_hash: "hash".to_string(),
        sector_id,
    }
}

/// Expected: Ok with sector name resolved and no roles
#[tokio::test]
async fn creates_user_with_sector_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::sector::SectorFactory::new(db)
        .name("Financeiro")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .create(new_user("ana@example.com", Some(sector.id)))
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.sector_id, Some(sector.id));
    assert_eq!(user.sector_name.as_deref(), Some("Financeiro"));
    assert!(user.user_types.is_empty());

    Ok(())
}

/// Expected: Err on duplicate email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("dup@example.com", None)).await?;

    let result = repo.create(new_user("dup@example.com", None)).await;

    assert!(result.is_err());

    Ok(())
}
