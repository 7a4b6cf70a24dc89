use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub sector_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sector::Entity",
        from = "Column::SectorId",
        to = "super::sector::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Sector,
    #[sea_orm(has_many = "super::type_user::Entity")]
    TypeUser,
}

impl Related<super::sector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sector.def()
    }
}

impl Related<super::type_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeUser.def()
    }
}

impl Related<super::user_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::type_user::Relation::UserType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::type_user::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
