//! Initiative history repository. History rows are append-only.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::history::{CreateHistoryParam, HistoryEntry};

pub struct HistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a status transition.
    pub async fn create(&self, param: CreateHistoryParam) -> Result<(), DbErr> {
        entity::initiative_history::ActiveModel {
            initiative_id: ActiveValue::Set(param.initiative_id),
            user_id: ActiveValue::Set(param.user_id),
            old_status: ActiveValue::Set(param.old_status),
            new_status: ActiveValue::Set(param.new_status),
            reason: ActiveValue::Set(param.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Lists an initiative's history newest first, with the acting user's name.
    pub async fn get_by_initiative(&self, initiative_id: i32) -> Result<Vec<HistoryEntry>, DbErr> {
        let rows = entity::prelude::InitiativeHistory::find()
            .filter(entity::initiative_history::Column::InitiativeId.eq(initiative_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::initiative_history::Column::CreatedAt)
            .order_by_desc(entity::initiative_history::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(entry, user)| {
                HistoryEntry::from_entity(entry, user.map(|u| u.name).unwrap_or_default())
            })
            .collect())
    }
}
