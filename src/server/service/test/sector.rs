use super::*;
use crate::server::{
    model::sector::{CreateSectorParam, UpdateSectorParam},
    service::sector::SectorService,
};

fn param(name: &str) -> CreateSectorParam {
    CreateSectorParam {
        name: name.to_string(),
        description: None,
        active: true,
    }
}

/// Expected: short and duplicate names rejected
#[tokio::test]
async fn validates_name() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let service = SectorService::new(db);

    assert_bad_request(
        service.create(param("TI")).await,
        "nome do setor deve ter no mínimo 3 caracteres",
    );

    let sector = service.create(param("Operações")).await?;
    assert_bad_request(
        service.create(param("Operações")).await,
        "já existe um setor com este nome",
    );

    let other = service.create(param("Qualidade")).await?;
    assert_bad_request(
        service
            .update(
                other.id,
                UpdateSectorParam {
                    name: Some(sector.name.clone()),
                    ..Default::default()
                },
            )
            .await,
        "já existe um setor com este nome",
    );

    Ok(())
}

/// Expected: deletion refused while users are linked, allowed afterwards
#[tokio::test]
async fn refuses_delete_with_linked_users() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    factory::user::UserFactory::new(db)
        .sector_id(sector.id)
        .build()
        .await?;
    let empty = factory::create_sector(db).await?;

    let service = SectorService::new(db);
    assert_bad_request(
        service.delete(sector.id).await,
        "não é possível deletar o setor pois existem 1 usuário(s) vinculado(s). Remova os usuários primeiro.",
    );

    service.delete(empty.id).await?;
    assert!(matches!(
        service.get_by_id(empty.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
