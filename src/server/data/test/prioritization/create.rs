use super::*;

/// Expected: created locked, order round-trips, names resolved
#[tokio::test]
async fn creates_locked_prioritization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::sector::SectorFactory::new(db)
        .name("Jurídico")
        .build()
        .await?;
    let user = factory::user::UserFactory::new(db)
        .name("Gabriel")
        .sector_id(sector.id)
        .build()
        .await?;

    let repo = PrioritizationRepository::new(db);
    let created = repo.create(sector.id, 2025, &[3, 1, 2], user.id).await?;

    assert!(created.is_locked);
    assert_eq!(created.priority_order, vec![3, 1, 2]);
    assert_eq!(created.sector_name, "Jurídico");
    assert_eq!(created.created_by_name, "Gabriel");

    let found = repo.find_by_sector_and_year(sector.id, 2025).await?;
    assert_eq!(found.map(|p| p.id), Some(created.id));
    assert!(repo.find_by_sector_and_year(sector.id, 2026).await?.is_none());

    Ok(())
}
