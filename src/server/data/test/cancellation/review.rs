use super::*;

/// Expected: first review wins, second sees the request is no longer pending
#[tokio::test]
async fn reviews_only_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let reviewer = factory::user::UserFactory::new(db)
        .name("Fernanda")
        .build()
        .await?;
    let initiative = factory::create_initiative(db, owner.id).await?;
    let request = factory::create_cancellation_request(db, initiative.id, owner.id).await?;

    let repo = CancellationRepository::new(db);
    let first = repo
        .review(
            request.id,
            RequestStatus::Approved,
            reviewer.id,
            "ok, pode cancelar",
        )
        .await?;
    let second = repo
        .review(
            request.id,
            RequestStatus::Rejected,
            reviewer.id,
            "tarde demais",
        )
        .await?;

    assert!(first);
    assert!(!second);

    let stored = repo.find_by_id(request.id).await?.expect("request exists");
    assert_eq!(stored.status, "Aprovada");
    assert_eq!(stored.reviewed_by_user_id, Some(reviewer.id));
    assert_eq!(stored.reviewed_by_name.as_deref(), Some("Fernanda"));
    assert_eq!(stored.review_reason.as_deref(), Some("ok, pode cancelar"));
    assert!(stored.reviewed_at.is_some());
    assert!(!repo.has_pending(initiative.id).await?);

    Ok(())
}
