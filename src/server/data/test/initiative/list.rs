use super::*;
use crate::server::data::initiative::like_pattern;

/// Expected: newest first with owner and sector names resolved
#[tokio::test]
async fn lists_newest_first_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sector = factory::sector::SectorFactory::new(db)
        .name("Logística")
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .name("Carla")
        .build()
        .await?;
    let older = factory::initiative::InitiativeFactory::new(db, owner.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::initiative::InitiativeFactory::new(db, owner.id)
        .sector_id(sector.id)
        .build()
        .await?;

    let initiatives = InitiativeRepository::new(db)
        .list(&InitiativeFilter::default())
        .await?;

    assert_eq!(initiatives.len(), 2);
    assert_eq!(initiatives[0].id, newer.id);
    assert_eq!(initiatives[0].sector_name.as_deref(), Some("Logística"));
    assert_eq!(initiatives[0].owner_name, "Carla");
    assert_eq!(initiatives[1].id, older.id);
    assert_eq!(initiatives[1].sector_name, None);

    Ok(())
}

/// Expected: search matches title or description regardless of case
#[tokio::test]
async fn searches_title_and_description_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let by_title = factory::initiative::InitiativeFactory::new(db, owner.id)
        .title("Portal de Compras")
        .build()
        .await?;
    let by_description = factory::initiative::InitiativeFactory::new(db, owner.id)
        .description("Integrar o PORTAL com o ERP financeiro")
        .build()
        .await?;
    factory::initiative::InitiativeFactory::new(db, owner.id)
        .title("Chatbot")
        .build()
        .await?;

    let filter = InitiativeFilter {
        search: Some("portal".to_string()),
        ..Default::default()
    };
    let mut ids: Vec<i32> = InitiativeRepository::new(db)
        .list(&filter)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![by_title.id, by_description.id]);

    Ok(())
}

/// Expected: `%` and `_` in the search text match literally instead of acting as wildcards
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let mut created = Vec::new();
    for title in [
        "Cobertura de 100% dos contratos",
        "Atingir 1000 clientes",
        "Campo cod_interno no ERP",
        "Campo codXinterno no CRM",
    ] {
        let initiative = factory::initiative::InitiativeFactory::new(db, owner.id)
            .title(title)
            .description("Sem detalhes adicionais")
            .build()
            .await?;
        created.push(initiative.id);
    }

    let repo = InitiativeRepository::new(db);
    let search = |text: &str| InitiativeFilter {
        search: Some(text.to_string()),
        ..Default::default()
    };

    let percent = repo.list(&search("100%")).await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].id, created[0]);

    let underscore = repo.list(&search("COD_INTERNO")).await?;
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].id, created[2]);

    Ok(())
}

/// Expected: search text is lower-cased, wrapped in wildcards and escaped
#[test]
fn like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("Meta"), "%meta%");
    assert_eq!(like_pattern("100%"), "%100\\%%");
    assert_eq!(like_pattern("cod_interno"), "%cod\\_interno%");
    assert_eq!(like_pattern(r"c:\dados"), r"%c:\\dados%");
}

/// Expected: filters combine with AND, sector filter matches the sector name
#[tokio::test]
async fn combines_status_and_sector_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_initiative_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rh = factory::sector::SectorFactory::new(db)
        .name("RH")
        .build()
        .await?;
    let ti = factory::sector::SectorFactory::new(db)
        .name("TI")
        .build()
        .await?;
    let owner = factory::create_user(db).await?;
    let wanted = factory::initiative::InitiativeFactory::new(db, owner.id)
        .sector_id(rh.id)
        .status("Aprovada")
        .build()
        .await?;
    factory::initiative::InitiativeFactory::new(db, owner.id)
        .sector_id(rh.id)
        .build()
        .await?;
    factory::initiative::InitiativeFactory::new(db, owner.id)
        .sector_id(ti.id)
        .status("Aprovada")
        .build()
        .await?;

    let filter = InitiativeFilter {
        status: Some("Aprovada".to_string()),
        sector: Some("RH".to_string()),
        ..Default::default()
    };
    let initiatives = InitiativeRepository::new(db).list(&filter).await?;

    assert_eq!(initiatives.len(), 1);
    assert_eq!(initiatives[0].id, wanted.id);

    Ok(())
}
