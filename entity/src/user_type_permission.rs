use sea_orm::entity::prelude::*;

/// Grants a user type access to every route matching `endpoint` for `method`.
///
/// `endpoint` may contain `{param}` placeholders, each matching a single path segment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_type_permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_type_id: i32,
    pub endpoint: String,
    pub method: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_type::Entity",
        from = "Column::UserTypeId",
        to = "super::user_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserType,
}

impl Related<super::user_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
