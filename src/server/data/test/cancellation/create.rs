use super::*;
use crate::server::{
    error::AppError,
    model::cancellation::CreateCancellationParam,
    service::{cancellation::ALREADY_PENDING, conflict_as_bad_request, is_unique_violation},
};

fn param(initiative_id: i32, requested_by_user_id: i32) -> CreateCancellationParam {
    CreateCancellationParam {
        initiative_id,
        requested_by_user_id,
        reason: "Projeto perdeu o patrocinador".to_string(),
    }
}

/// Expected: the migrated schema refuses a second pending request for the same initiative,
/// and the service turns that conflict into its 400 message
#[tokio::test]
async fn second_pending_request_violates_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let repo = CancellationRepository::new(db);
    repo.create(param(initiative.id, owner.id)).await?;

    let err = repo
        .create(param(initiative.id, owner.id))
        .await
        .expect_err("second pending request must be rejected");

    assert!(is_unique_violation(&err));
    assert!(matches!(
        conflict_as_bad_request(err, ALREADY_PENDING),
        AppError::BadRequest(message) if message == ALREADY_PENDING
    ));

    Ok(())
}

/// Expected: once the pending request is reviewed, a new one may be opened
#[tokio::test]
async fn reviewed_request_frees_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let reviewer = factory::create_user(db).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let repo = CancellationRepository::new(db);
    let first = repo.create(param(initiative.id, owner.id)).await?;
    repo.review(first.id, RequestStatus::Rejected, reviewer.id, "ainda não")
        .await?;

    let second = repo.create(param(initiative.id, owner.id)).await?;

    assert_ne!(second.id, first.id);
    assert_eq!(second.status, "Pendente");

    Ok(())
}
