use super::*;

/// Expected: patterns from every role of the user, filtered by method, without duplicates
#[tokio::test]
async fn collects_patterns_across_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, member) = factory::create_user_with_role(db, "user").await?;
    let reviewer = factory::create_user_type(db, "manager").await?;
    factory::assign_user_type(db, user.id, reviewer.id).await?;

    factory::grant_permission(db, member.id, "/api/private/initiatives", "GET").await?;
    factory::grant_permission(db, member.id, "/api/private/initiatives", "POST").await?;
    factory::grant_permission(db, reviewer.id, "/api/private/initiatives", "GET").await?;
    factory::grant_permission(db, reviewer.id, "/api/private/initiatives/submitted", "GET").await?;

    let mut patterns = PermissionRepository::new(db)
        .get_methods_patterns(user.id, "GET")
        .await?;
    patterns.sort();

    assert_eq!(
        patterns,
        vec![
            "/api/private/initiatives".to_string(),
            "/api/private/initiatives/submitted".to_string(),
        ]
    );

    Ok(())
}

/// Expected: empty for a user without roles
#[tokio::test]
async fn returns_empty_without_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let patterns = PermissionRepository::new(db)
        .get_methods_patterns(user.id, "GET")
        .await?;

    assert!(patterns.is_empty());

    Ok(())
}
