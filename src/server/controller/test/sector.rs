use super::*;
use crate::{
    model::sector::{CreateSectorDto, SectorListQuery},
    server::controller::sector::{create_sector, delete_sector, get_sector, list_sectors},
};

/// Expected: 201 with message and sector payload
#[tokio::test]
async fn create_returns_created_envelope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = create_sector(
        State(test_state(db)),
        Json(CreateSectorDto {
            name: "  Financeiro  ".to_string(),
            description: Some("Contas e pagamentos".to_string()),
            active: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Setor criado com sucesso"));
    assert_eq!(body["data"]["name"], json!("Financeiro"));
    assert_eq!(body["data"]["active"], json!(true));

    Ok(())
}

/// Expected: 400 error envelope for a short name
#[tokio::test]
async fn create_rejects_short_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = create_sector(
        State(test_state(db)),
        Json(CreateSectorDto {
            name: "RH".to_string(),
            description: None,
            active: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": false,
            "error": "nome do setor deve ter no mínimo 3 caracteres",
            "code": 400
        })
    );

    Ok(())
}

/// Expected: list carries count and per-sector user counts
#[tokio::test]
async fn list_includes_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    factory::create_sector(db).await?;
    factory::user::UserFactory::new(db)
        .sector_id(sector.id)
        .build()
        .await?;

    let response = list_sectors(
        State(test_state(db)),
        Query(SectorListQuery { active_only: false }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], json!(2));
    let linked = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == json!(sector.id))
        .unwrap();
    assert_eq!(linked["user_count"], json!(1));

    Ok(())
}

/// Expected: 404 for a missing sector, 200 message after delete
#[tokio::test]
async fn get_and_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sector = factory::create_sector(db).await?;
    let state = test_state(db);

    let missing = get_sector(State(state.clone()), Path(999))
        .await
        .into_response();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["code"], json!(404));

    let deleted = delete_sector(State(state.clone()), Path(sector.id))
        .await
        .into_response();
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(body_json(deleted).await["success"], json!(true));

    Ok(())
}
