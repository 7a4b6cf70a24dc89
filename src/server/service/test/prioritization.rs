use super::*;
use crate::server::{
    model::{
        prioritization::{PrioritizationView, RequestChangeParam, SavePrioritizationParam},
        review::ReviewParam,
    },
    service::prioritization::PrioritizationService,
};

const YEAR: i32 = 2026;

fn save(order: Vec<i32>) -> SavePrioritizationParam {
    SavePrioritizationParam {
        year: YEAR,
        priority_order: order,
    }
}

fn is_locked(view: &PrioritizationView) -> bool {
    view.prioritization.as_ref().is_some_and(|p| p.is_locked)
}

/// Expected: first save creates a locked ranking in the given order
#[tokio::test]
async fn save_locks_ranking() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let user = user_with_role(db, "user", Some(sector.id)).await?;
    let first = factory::create_initiative(db, user.id).await?;
    let second = factory::create_initiative(db, user.id).await?;

    let view = PrioritizationService::new(db)
        .save(&user, save(vec![second.id, first.id]))
        .await?;

    assert!(is_locked(&view));
    assert_eq!(view.sector_id, sector.id);
    let ids: Vec<i32> = view.initiatives.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Expected: locked ranking refused for plain users, overwritten by managers
#[tokio::test]
async fn locked_ranking_needs_privileged_role() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let user = user_with_role(db, "user", Some(sector.id)).await?;
    let manager = user_with_role(db, "manager", Some(sector.id)).await?;
    let first = factory::create_initiative(db, user.id).await?;
    let second = factory::create_initiative(db, user.id).await?;

    let service = PrioritizationService::new(db);
    service.save(&user, save(vec![first.id, second.id])).await?;

    assert_bad_request(
        service.save(&user, save(vec![second.id, first.id])).await,
        "priorização já está bloqueada. Solicite aprovação para alterá-la",
    );

    let view = service
        .save(&manager, save(vec![second.id, first.id]))
        .await?;
    assert_eq!(
        view.prioritization.map(|p| p.priority_order),
        Some(vec![second.id, first.id])
    );

    Ok(())
}

/// Expected: approved change request unlocks, next save relocks
#[tokio::test]
async fn approved_change_request_unlocks() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let user = user_with_role(db, "user", Some(sector.id)).await?;
    let admin = user_with_role(db, "admin", None).await?;
    let first = factory::create_initiative(db, user.id).await?;
    let second = factory::create_initiative(db, user.id).await?;

    let service = PrioritizationService::new(db);
    service.save(&user, save(vec![first.id, second.id])).await?;

    let request = service
        .request_change(
            &user,
            RequestChangeParam {
                year: YEAR,
                new_priority_order: vec![second.id, first.id],
                reason: "Nova diretriz da diretoria".to_string(),
            },
        )
        .await?;
    assert_eq!(request.status, "Pendente");

    assert_bad_request(
        service
            .request_change(
                &user,
                RequestChangeParam {
                    year: YEAR,
                    new_priority_order: vec![first.id],
                    reason: "Outra mudança qualquer".to_string(),
                },
            )
            .await,
        "já existe uma solicitação de mudança pendente para esta priorização",
    );

    service
        .review_change(
            request.id,
            &admin,
            ReviewParam {
                approved: true,
                reason: "Aprovado pelo comitê".to_string(),
            },
        )
        .await?;

    assert!(!is_locked(&service.get(&user, YEAR).await?));
    assert!(service.list_pending_change_requests(&admin).await?.is_empty());

    let view = service.save(&user, save(vec![second.id, first.id])).await?;
    assert!(is_locked(&view));

    Ok(())
}

/// Expected: unsaved year lists prioritizable initiatives of the sector, unlocked
#[tokio::test]
async fn empty_view_lists_prioritizable_initiatives() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let user = user_with_role(db, "user", Some(sector.id)).await?;
    let approved = factory::initiative::InitiativeFactory::new(db, user.id)
        .status("Aprovada")
        .sector_id(sector.id)
        .build()
        .await?;
    factory::initiative::InitiativeFactory::new(db, user.id)
        .status("Submetida")
        .sector_id(sector.id)
        .build()
        .await?;

    let view = PrioritizationService::new(db).get(&user, YEAR).await?;

    assert!(view.prioritization.is_none());
    assert!(!is_locked(&view));
    assert_eq!(view.sector_name, sector.name);
    let ids: Vec<i32> = view.initiatives.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![approved.id]);

    Ok(())
}

/// Expected: users without a sector and out-of-range years rejected
#[tokio::test]
async fn save_validates_user_and_year() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let homeless = user_with_role(db, "user", None).await?;
    let user = user_with_role(db, "user", Some(sector.id)).await?;

    let service = PrioritizationService::new(db);

    assert_bad_request(
        service.save(&homeless, save(vec![1])).await,
        "usuário não está vinculado a um setor",
    );
    assert_bad_request(
        service
            .save(
                &user,
                SavePrioritizationParam {
                    year: 1999,
                    priority_order: vec![1],
                },
            )
            .await,
        "ano inválido",
    );
    assert_bad_request(
        service.save(&user, save(Vec::new())).await,
        "ordem de prioridade não pode estar vazia",
    );

    Ok(())
}

/// Expected: get_all lists every active sector when nothing was saved
#[tokio::test]
async fn get_all_falls_back_to_active_sectors() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    factory::create_sector(db).await?;
    factory::create_sector(db).await?;
    factory::sector::SectorFactory::new(db)
        .active(false)
        .build()
        .await?;
    let manager = user_with_role(db, "manager", None).await?;
    let user = user_with_role(db, "user", None).await?;

    let service = PrioritizationService::new(db);

    assert!(matches!(
        service.get_all(&user, YEAR).await,
        Err(AppError::Forbidden(_))
    ));

    let all = service.get_all(&manager, YEAR).await?;
    assert_eq!(all.year, YEAR);
    assert_eq!(all.sectors.len(), 2);
    assert!(all.sectors.iter().all(|s| s.prioritization.is_none()));

    Ok(())
}
