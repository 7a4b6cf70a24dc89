use super::*;

/// Expected: initiatives in the requested order, unknown IDs skipped
#[tokio::test]
async fn preserves_requested_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::create_initiative(db, owner.id).await?;
    let second = factory::create_initiative(db, owner.id).await?;
    let third = factory::create_initiative(db, owner.id).await?;

    let initiatives = InitiativeRepository::new(db)
        .list_by_ids(&[third.id, 9999, first.id, second.id])
        .await?;

    let ids: Vec<i32> = initiatives.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![third.id, first.id, second.id]);

    Ok(())
}
