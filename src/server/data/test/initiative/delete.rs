use super::*;

/// Expected: initiative removed together with history, comments and cancellation requests
#[tokio::test]
async fn deletes_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;
    factory::history::create_history(
        db,
        initiative.id,
        owner.id,
        "Rascunho",
        "Submetida",
        Utc::now(),
    )
    .await?;
    factory::create_comment(db, initiative.id, owner.id, "Boa ideia").await?;
    factory::create_cancellation_request(db, initiative.id, owner.id).await?;

    let deleted = InitiativeRepository::new(db).delete(initiative.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Initiative::find_by_id(initiative.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::InitiativeHistory::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Comment::find().all(db).await?.is_empty());
    assert!(entity::prelude::CancellationRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Expected: false for an unknown ID
#[tokio::test]
async fn returns_false_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = InitiativeRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
