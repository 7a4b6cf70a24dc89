use super::*;
use crate::server::data::user::UserRepository;

/// Expected: assigning twice keeps a single link, removal reports whether a link existed
#[tokio::test]
async fn assign_is_idempotent_and_remove_reports() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_user_type(db, "admin").await?;

    let repo = PermissionRepository::new(db);
    repo.assign_user_type(user.id, admin.id).await?;
    repo.assign_user_type(user.id, admin.id).await?;

    let users = UserRepository::new(db);
    let types = users
        .find_by_id(user.id)
        .await?
        .expect("user exists")
        .user_types;
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "admin");

    assert!(repo.remove_user_type(user.id, admin.id).await?);
    assert!(!repo.remove_user_type(user.id, admin.id).await?);
    let types = users
        .find_by_id(user.id)
        .await?
        .expect("user exists")
        .user_types;
    assert!(types.is_empty());

    Ok(())
}
