use super::*;

/// Expected: map contains only existing users
#[tokio::test]
async fn maps_known_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Bruno")
        .build()
        .await?;

    let names = UserRepository::new(db)
        .names_by_ids(&[user.id, user.id + 100])
        .await?;

    assert_eq!(names.len(), 1);
    assert_eq!(names.get(&user.id).map(String::as_str), Some("Bruno"));

    Ok(())
}
