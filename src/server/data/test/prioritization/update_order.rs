use super::*;

/// Expected: unlock clears the lock, saving a new order locks again
#[tokio::test]
async fn relocks_after_new_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::create_sector(db).await?;
    let user = factory::create_user(db).await?;
    let stored = factory::create_prioritization(db, sector.id, 2025, &[1, 2], true, user.id).await?;

    let repo = PrioritizationRepository::new(db);
    repo.unlock(stored.id).await?;
    let unlocked = repo.find_by_id(stored.id).await?.expect("exists");
    assert!(!unlocked.is_locked);

    repo.update_order(stored.id, &[2, 1]).await?;
    let saved = repo.find_by_id(stored.id).await?.expect("exists");
    assert!(saved.is_locked);
    assert_eq!(saved.priority_order, vec![2, 1]);

    Ok(())
}
