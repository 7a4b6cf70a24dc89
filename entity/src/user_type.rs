use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::type_user::Entity")]
    TypeUser,
    #[sea_orm(has_many = "super::user_type_permission::Entity")]
    UserTypePermission,
}

impl Related<super::type_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeUser.def()
    }
}

impl Related<super::user_type_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserTypePermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
