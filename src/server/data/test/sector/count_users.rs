use super::*;

/// Expected: only users linked to the sector are counted
#[tokio::test]
async fn counts_linked_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::create_sector(db).await?;
    factory::user::UserFactory::new(db)
        .sector_id(sector.id)
        .build()
        .await?;
    factory::create_user(db).await?;

    let count = SectorRepository::new(db).count_users(sector.id).await?;

    assert_eq!(count, 1);

    Ok(())
}
