use super::*;

/// Expected: sectors ordered by name with linked user counts
#[tokio::test]
async fn lists_sectors_with_user_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tech = factory::sector::SectorFactory::new(db)
        .name("Tecnologia")
        .build()
        .await?;
    factory::sector::SectorFactory::new(db)
        .name("Compras")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .sector_id(tech.id)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .sector_id(tech.id)
        .build()
        .await?;

    let sectors = SectorRepository::new(db).get_all(false).await?;

    assert_eq!(sectors.len(), 2);
    assert_eq!(sectors[0].sector.name, "Compras");
    assert_eq!(sectors[0].user_count, 0);
    assert_eq!(sectors[1].sector.name, "Tecnologia");
    assert_eq!(sectors[1].user_count, 2);

    Ok(())
}

/// Expected: inactive sectors skipped when `active_only`
#[tokio::test]
async fn filters_inactive_sectors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sector::SectorFactory::new(db)
        .name("Ativo")
        .build()
        .await?;
    factory::sector::SectorFactory::new(db)
        .name("Inativo")
        .active(false)
        .build()
        .await?;

    let repo = SectorRepository::new(db);
    let active = repo.get_all(true).await?;
    let all = repo.get_all(false).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].sector.name, "Ativo");
    assert_eq!(all.len(), 2);

    Ok(())
}
