use sea_orm::entity::prelude::*;

/// A sector's ranked list of initiatives for one year.
///
/// `priority_order` holds the initiative ids as a JSON array.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "initiative_prioritization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sector_id: i32,
    pub year: i32,
    #[sea_orm(column_type = "Text")]
    pub priority_order: String,
    pub is_locked: bool,
    pub created_by_user_id: i32,
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
        on_delete = "Cascade"
    )]
    Sector,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::prioritization_change_request::Entity")]
    ChangeRequest,
}

impl Related<super::sector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sector.def()
    }
}

impl Related<super::prioritization_change_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChangeRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
