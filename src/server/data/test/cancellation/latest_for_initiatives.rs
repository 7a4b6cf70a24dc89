use super::*;

/// Expected: only the most recent request per initiative, whatever its status
#[tokio::test]
async fn keeps_most_recent_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;
    let untouched = factory::create_initiative(db, owner.id).await?;
    factory::cancellation_request::CancellationRequestFactory::new(db, initiative.id, owner.id)
        .status("Reprovada")
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let latest = factory::create_cancellation_request(db, initiative.id, owner.id).await?;

    let map = CancellationRepository::new(db)
        .latest_for_initiatives(&[initiative.id, untouched.id])
        .await?;

    assert_eq!(map.len(), 1);
    let request = map.get(&initiative.id).expect("initiative has a request");
    assert_eq!(request.id, latest.id);
    assert_eq!(request.status, "Pendente");
    assert_eq!(request.initiative_title, initiative.title);

    Ok(())
}
