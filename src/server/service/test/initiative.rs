use super::*;
use crate::server::{
    data::{history::HistoryRepository, initiative::InitiativeRepository},
    model::{
        initiative::{ChangeStatusParam, CreateInitiativeParam, UpdateInitiativeParam},
        review::ReviewParam,
    },
    service::initiative::InitiativeService,
};

fn param() -> CreateInitiativeParam {
    CreateInitiativeParam {
        title: "Automatizar conciliação".to_string(),
        description: "Reduzir o trabalho manual na conciliação bancária mensal".to_string(),
        benefits: "Menos erros e fechamento mais rápido".to_string(),
        kind: "Automação".to_string(),
        priority: "Alta".to_string(),
        sector_id: None,
        deadline: Some("2026-12-31".to_string()),
    }
}

fn review(approved: bool, reason: &str) -> ReviewParam {
    ReviewParam {
        approved,
        reason: reason.to_string(),
    }
}

/// Expected: Submetida with owner's sector and a Rascunho -> Submetida history row
#[tokio::test]
async fn create_records_submission() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let owner = user_with_role(db, "user", Some(sector.id)).await?;

    let initiative = InitiativeService::new(db).create(&owner, param()).await?;

    assert_eq!(initiative.status, "Submetida");
    assert_eq!(initiative.sector_id, Some(sector.id));
    assert_eq!(initiative.owner_id, owner.id);

    let history = HistoryRepository::new(db)
        .get_by_initiative(initiative.id)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].old_status, "Rascunho");
    assert_eq!(history[0].new_status, "Submetida");

    Ok(())
}

/// Expected: nothing written when validation fails
#[tokio::test]
async fn create_validates_fields() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let service = InitiativeService::new(db);

    assert_bad_request(
        service
            .create(
                &owner,
                CreateInitiativeParam {
                    title: "Curt".to_string(),
                    ..param()
                },
            )
            .await,
        "título deve ter no mínimo 5 caracteres",
    );
    assert_bad_request(
        service
            .create(
                &owner,
                CreateInitiativeParam {
                    kind: "Outro".to_string(),
                    ..param()
                },
            )
            .await,
        "tipo de iniciativa inválido",
    );
    assert_bad_request(
        service
            .create(
                &owner,
                CreateInitiativeParam {
                    deadline: Some("31/12/2026".to_string()),
                    ..param()
                },
            )
            .await,
        "formato de data inválido, use YYYY-MM-DD",
    );

    assert_eq!(InitiativeRepository::new(db).count_by_owner(owner.id).await?, 0);

    Ok(())
}

/// Expected: Forbidden for a non-owner, allowed for owner and admin
#[tokio::test]
async fn update_requires_owner_or_admin() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let stranger = user_with_role(db, "user", None).await?;
    let admin = user_with_role(db, "admin", None).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let service = InitiativeService::new(db);
    let change = |title: &str| UpdateInitiativeParam {
        title: Some(title.to_string()),
        ..Default::default()
    };

    assert!(matches!(
        service
            .update(initiative.id, &stranger, change("Título alheio"))
            .await,
        Err(AppError::Forbidden(_))
    ));

    let updated = service
        .update(initiative.id, &owner, change("Título do dono"))
        .await?;
    assert_eq!(updated.title, "Título do dono");

    let updated = service
        .update(initiative.id, &admin, change("Título do admin"))
        .await?;
    assert_eq!(updated.title, "Título do admin");

    Ok(())
}

/// Expected: benefits shorter than 10 characters rejected on update
#[tokio::test]
async fn update_validates_benefits() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let result = InitiativeService::new(db)
        .update(
            initiative.id,
            &owner,
            UpdateInitiativeParam {
                benefits: Some("pouco".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_bad_request(result, "benefícios devem ter no mínimo 10 caracteres");

    Ok(())
}

/// Expected: manager approval moves Submetida to Aprovada with an annotated history row
#[tokio::test]
async fn review_approves_submitted() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let manager = user_with_role(db, "manager", None).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let service = InitiativeService::new(db);
    service
        .review(
            initiative.id,
            &manager,
            review(true, "Alinhada ao planejamento"),
        )
        .await?;

    let reviewed = service.get_by_id(initiative.id).await?;
    assert_eq!(reviewed.status, "Aprovada");

    let history = HistoryRepository::new(db)
        .get_by_initiative(initiative.id)
        .await?;
    assert_eq!(history[0].old_status, "Submetida");
    assert_eq!(history[0].new_status, "Aprovada");
    assert_eq!(
        history[0].reason,
        "✅ Iniciativa aprovada: Alinhada ao planejamento"
    );
    assert_eq!(history[0].user_id, manager.id);

    Ok(())
}

/// Expected: second review fails because the initiative left Submetida
#[tokio::test]
async fn review_only_accepts_submitted() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let admin = user_with_role(db, "admin", None).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let service = InitiativeService::new(db);
    service
        .review(initiative.id, &admin, review(false, "Fora do escopo anual"))
        .await?;

    assert_eq!(service.get_by_id(initiative.id).await?.status, "Reprovada");
    assert_bad_request(
        service
            .review(initiative.id, &admin, review(true, "Reconsiderada agora"))
            .await,
        "apenas iniciativas submetidas podem ser revisadas",
    );

    Ok(())
}

/// Expected: Forbidden for plain users, short reason rejected
#[tokio::test]
async fn review_checks_reviewer_and_reason() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let manager = user_with_role(db, "manager", None).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let service = InitiativeService::new(db);

    assert!(matches!(
        service
            .review(initiative.id, &owner, review(true, "Aprovando a minha"))
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert_bad_request(
        service
            .review(initiative.id, &manager, review(true, "ok"))
            .await,
        "justificativa deve ter no mínimo 10 caracteres",
    );

    Ok(())
}

/// Expected: admins may set any assignable status, others are forbidden
#[tokio::test]
async fn change_status_is_admin_only() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let manager = user_with_role(db, "manager", None).await?;
    let admin = user_with_role(db, "admin", None).await?;
    let initiative = factory::create_initiative(db, owner.id).await?;

    let service = InitiativeService::new(db);
    let param = |status: &str| ChangeStatusParam {
        status: status.to_string(),
        reason: "Ajuste administrativo".to_string(),
    };

    assert!(matches!(
        service
            .change_status(initiative.id, &manager, param("Em Execução"))
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert_bad_request(
        service
            .change_status(initiative.id, &admin, param("Rascunho"))
            .await,
        "status inválido",
    );

    service
        .change_status(initiative.id, &admin, param("Em Homologação"))
        .await?;

    assert_eq!(
        service.get_by_id(initiative.id).await?.status,
        "Em Homologação"
    );

    Ok(())
}

/// Expected: submitted listing restricted to admins and managers
#[tokio::test]
async fn list_submitted_requires_privileged_role() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = user_with_role(db, "user", None).await?;
    let manager = user_with_role(db, "manager", None).await?;
    factory::create_initiative(db, owner.id).await?;
    factory::initiative::InitiativeFactory::new(db, owner.id)
        .status("Aprovada")
        .build()
        .await?;

    let service = InitiativeService::new(db);

    assert!(matches!(
        service.list_submitted(&owner).await,
        Err(AppError::Forbidden(_))
    ));
    let submitted = service.list_submitted(&manager).await?;
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].status, "Submetida");

    Ok(())
}
