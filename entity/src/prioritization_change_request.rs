use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prioritization_change_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub prioritization_id: i32,
    pub requested_by_user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub new_priority_order: String,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub status: String,
    pub reviewed_by_user_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prioritization::Entity",
        from = "Column::PrioritizationId",
        to = "super::prioritization::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Prioritization,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RequestedByUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewedByUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ReviewedBy,
}

impl Related<super::prioritization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prioritization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
