use super::*;

/// Expected: content replaced, None for an unknown comment
#[tokio::test]
async fn updates_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let initiative = factory::create_initiative(db, author.id).await?;
    let comment = factory::create_comment(db, initiative.id, author.id, "antes").await?;

    let repo = CommentRepository::new(db);
    let updated = repo.update(comment.id, "depois".to_string()).await?;
    let missing = repo.update(comment.id + 1, "x".to_string()).await?;

    assert_eq!(updated.map(|c| c.content).as_deref(), Some("depois"));
    assert!(missing.is_none());

    Ok(())
}
