use super::*;

/// Expected: oldest comment first with author names
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .name("Elisa")
        .build()
        .await?;
    let initiative = factory::create_initiative(db, author.id).await?;
    let now = Utc::now();
    factory::comment::create_comment_at(db, initiative.id, author.id, "segundo", now).await?;
    factory::comment::create_comment_at(
        db,
        initiative.id,
        author.id,
        "primeiro",
        now - Duration::minutes(5),
    )
    .await?;

    let comments = CommentRepository::new(db)
        .get_by_initiative(initiative.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "primeiro");
    assert_eq!(comments[1].content, "segundo");
    assert_eq!(comments[0].user_name, "Elisa");

    Ok(())
}
