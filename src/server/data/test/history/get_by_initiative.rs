use super::*;

/// Expected: newest entry first, acting user's name attached, other initiatives excluded
#[tokio::test]
async fn lists_newest_first_for_initiative() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .name("Diego")
        .build()
        .await?;
    let initiative = factory::create_initiative(db, owner.id).await?;
    let other = factory::create_initiative(db, owner.id).await?;
    let now = Utc::now();
    factory::history::create_history(
        db,
        initiative.id,
        owner.id,
        "Rascunho",
        "Submetida",
        now - Duration::hours(3),
    )
    .await?;
    factory::history::create_history(db, initiative.id, owner.id, "Submetida", "Aprovada", now)
        .await?;
    factory::history::create_history(db, other.id, owner.id, "Rascunho", "Submetida", now).await?;

    let entries = HistoryRepository::new(db)
        .get_by_initiative(initiative.id)
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].new_status, "Aprovada");
    assert_eq!(entries[1].new_status, "Submetida");
    assert_eq!(entries[0].user_name, "Diego");

    Ok(())
}
