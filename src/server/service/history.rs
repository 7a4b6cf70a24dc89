use sea_orm::DatabaseConnection;

use crate::server::{
    data::{history::HistoryRepository, initiative::InitiativeRepository},
    error::AppError,
    model::history::{CreateHistoryParam, HistoryEntry},
};

/// Append-only status audit trail of initiatives.
pub struct HistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry, logging instead of failing when the write does not go through.
    ///
    /// Used for entries that accompany a write that already succeeded.
    pub async fn record_or_log(&self, param: CreateHistoryParam) {
        let initiative_id = param.initiative_id;
        if let Err(err) = HistoryRepository::new(self.db).create(param).await {
            tracing::error!(
                "Failed to record history for initiative {}: {}",
                initiative_id,
                err
            );
        }
    }

    /// Gets the history of an initiative, newest first.
    pub async fn get_by_initiative(
        &self,
        initiative_id: i32,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        if InitiativeRepository::new(self.db)
            .find_by_id(initiative_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("iniciativa não encontrada"));
        }

        Ok(HistoryRepository::new(self.db)
            .get_by_initiative(initiative_id)
            .await?)
    }
}
