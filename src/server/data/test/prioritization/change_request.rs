use super::*;

/// Expected: pending request visible with sector and year, gone from pending after review
#[tokio::test]
async fn lists_and_reviews_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::sector::SectorFactory::new(db)
        .name("Marketing")
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    let reviewer = factory::create_user(db).await?;
    let stored = factory::create_prioritization(db, sector.id, 2025, &[1, 2], true, user.id).await?;

    let repo = PrioritizationRepository::new(db);
    let request = repo
        .create_change_request(stored.id, user.id, &[2, 1], "Nova diretriz".to_string())
        .await?;

    assert!(repo.has_pending_change_request(stored.id).await?);
    let pending = repo.list_pending_change_requests().await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, request.id);
    assert_eq!(pending[0].sector_name, "Marketing");
    assert_eq!(pending[0].year, 2025);
    assert_eq!(pending[0].new_priority_order, vec![2, 1]);

    assert!(
        repo.review_change_request(request.id, RequestStatus::Rejected, reviewer.id, "manter")
            .await?
    );
    assert!(
        !repo
            .review_change_request(request.id, RequestStatus::Approved, reviewer.id, "mudar")
            .await?
    );

    assert!(!repo.has_pending_change_request(stored.id).await?);
    assert!(repo.list_pending_change_requests().await?.is_empty());
    let reviewed = repo.find_change_request(request.id).await?.expect("exists");
    assert_eq!(reviewed.status, "Reprovada");

    Ok(())
}

/// Expected: the migrated schema refuses a second pending change request for the same
/// prioritization, and the service turns that conflict into its 400 message
#[tokio::test]
async fn second_pending_change_request_violates_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::create_sector(db).await?;
    let user = factory::create_user(db).await?;
    let stored = factory::create_prioritization(db, sector.id, 2026, &[1, 2], true, user.id).await?;

    let repo = PrioritizationRepository::new(db);
    repo.create_change_request(stored.id, user.id, &[2, 1], "Nova diretriz".to_string())
        .await?;

    let err = repo
        .create_change_request(stored.id, user.id, &[1, 2], "Outra diretriz".to_string())
        .await
        .expect_err("second pending change request must be rejected");

    assert!(is_unique_violation(&err));
    assert!(matches!(
        conflict_as_bad_request(err, ALREADY_PENDING),
        AppError::BadRequest(message) if message == ALREADY_PENDING
    ));

    Ok(())
}
