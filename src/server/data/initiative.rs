//! Initiative data repository for database operations.
//!
//! Initiatives are returned with owner and sector names resolved. Listing builds its
//! WHERE clause from the optional fields of [`InitiativeFilter`].

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{sector::SectorRepository, user::UserRepository},
    model::initiative::{Initiative, InitiativeChanges, InitiativeFilter, NewInitiative},
};

pub struct InitiativeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InitiativeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated initiative.
    ///
    /// # Returns
    /// - `Ok(Initiative)` - The created initiative with names resolved
    /// - `Err(DbErr)` - Database error, e.g. unknown owner or sector
    pub async fn create(&self, initiative: NewInitiative) -> Result<Initiative, DbErr> {
        let now = Utc::now();

        let entity = entity::initiative::ActiveModel {
            title: ActiveValue::Set(initiative.title),
            description: ActiveValue::Set(initiative.description),
            benefits: ActiveValue::Set(initiative.benefits),
            status: ActiveValue::Set(initiative.status.as_str().to_string()),
            kind: ActiveValue::Set(initiative.kind.as_str().to_string()),
            priority: ActiveValue::Set(initiative.priority.as_str().to_string()),
            sector_id: ActiveValue::Set(initiative.sector_id),
            owner_id: ActiveValue::Set(initiative.owner_id),
            deadline: ActiveValue::Set(initiative.deadline),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.single(entity).await
    }

    /// Finds an initiative by ID with names resolved.
    ///
    /// # Returns
    /// - `Ok(Some(Initiative))` - Initiative found
    /// - `Ok(None)` - No initiative with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Initiative>, DbErr> {
        let Some(entity) = entity::prelude::Initiative::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.single(entity).await?))
    }

    /// Lists initiatives matching every set filter field, newest first.
    ///
    /// `search` matches title or description case-insensitively; `sector` matches the sector
    /// name exactly. The remaining fields are exact matches.
    pub async fn list(&self, filter: &InitiativeFilter) -> Result<Vec<Initiative>, DbErr> {
        let mut query = entity::prelude::Initiative::find();

        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(lower_like(entity::initiative::Column::Title, &pattern))
                    .add(lower_like(entity::initiative::Column::Description, &pattern)),
            );
        }
        if let Some(status) = &filter.status {
            query = query.filter(entity::initiative::Column::Status.eq(status.as_str()));
        }
        if let Some(kind) = &filter.kind {
            query = query.filter(entity::initiative::Column::Kind.eq(kind.as_str()));
        }
        if let Some(priority) = &filter.priority {
            query = query.filter(entity::initiative::Column::Priority.eq(priority.as_str()));
        }
        if let Some(sector_id) = filter.sector_id {
            query = query.filter(entity::initiative::Column::SectorId.eq(sector_id));
        }
        if let Some(owner_id) = filter.owner_id {
            query = query.filter(entity::initiative::Column::OwnerId.eq(owner_id));
        }
        if let Some(sector) = &filter.sector {
            query = query
                .inner_join(entity::prelude::Sector)
                .filter(entity::sector::Column::Name.eq(sector.as_str()));
        }

        let entities = query
            .order_by_desc(entity::initiative::Column::CreatedAt)
            .order_by_desc(entity::initiative::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Loads initiatives by ID in the order given. Unknown IDs are skipped.
    pub async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<Initiative>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Initiative::find()
            .filter(entity::initiative::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut initiatives = self.hydrate(entities).await?;
        let mut ordered = Vec::with_capacity(initiatives.len());
        for id in ids {
            if let Some(pos) = initiatives.iter().position(|i| i.id == *id) {
                ordered.push(initiatives.swap_remove(pos));
            }
        }

        Ok(ordered)
    }

    /// Lists a sector's initiatives in any of the given statuses, newest first.
    pub async fn list_by_sector_and_statuses(
        &self,
        sector_id: i32,
        statuses: &[&str],
    ) -> Result<Vec<Initiative>, DbErr> {
        let entities = entity::prelude::Initiative::find()
            .filter(entity::initiative::Column::SectorId.eq(sector_id))
            .filter(entity::initiative::Column::Status.is_in(statuses.iter().copied()))
            .order_by_desc(entity::initiative::Column::CreatedAt)
            .order_by_desc(entity::initiative::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Applies validated changes.
    ///
    /// # Returns
    /// - `Ok(Some(Initiative))` - Updated initiative
    /// - `Ok(None)` - No initiative with that ID
    pub async fn update(
        &self,
        id: i32,
        changes: InitiativeChanges,
    ) -> Result<Option<Initiative>, DbErr> {
        let Some(entity) = entity::prelude::Initiative::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(benefits) = changes.benefits {
            active.benefits = ActiveValue::Set(benefits);
        }
        if let Some(kind) = changes.kind {
            active.kind = ActiveValue::Set(kind.as_str().to_string());
        }
        if let Some(priority) = changes.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(sector_id) = changes.sector_id {
            active.sector_id = ActiveValue::Set(Some(sector_id));
        }
        if let Some(deadline) = changes.deadline {
            active.deadline = ActiveValue::Set(deadline);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(self.single(entity).await?))
    }

    /// Sets the status column.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No initiative with that ID
    pub async fn update_status(&self, id: i32, status: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Initiative::update_many()
            .filter(entity::initiative::Column::Id.eq(id))
            .col_expr(entity::initiative::Column::Status, Expr::value(status))
            .col_expr(
                entity::initiative::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an initiative together with its history, comments and cancellation requests.
    ///
    /// Runs in one transaction so a failure leaves nothing half-deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Initiative deleted
    /// - `Ok(false)` - No initiative with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::InitiativeHistory::delete_many()
            .filter(entity::initiative_history::Column::InitiativeId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::InitiativeId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::CancellationRequest::delete_many()
            .filter(entity::cancellation_request::Column::InitiativeId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Initiative::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts initiatives owned by a user.
    pub async fn count_by_owner(&self, owner_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Initiative::find()
            .filter(entity::initiative::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }

    async fn single(&self, entity: entity::initiative::Model) -> Result<Initiative, DbErr> {
        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("initiative".to_string()))
    }

    /// Resolves owner and sector names for a batch of rows, preserving order.
    async fn hydrate(
        &self,
        entities: Vec<entity::initiative::Model>,
    ) -> Result<Vec<Initiative>, DbErr> {
        let owner_ids: Vec<i32> = entities.iter().map(|i| i.owner_id).collect();
        let sector_ids: Vec<i32> = entities.iter().filter_map(|i| i.sector_id).collect();

        let owner_names = UserRepository::new(self.db)
            .names_by_ids(&owner_ids)
            .await?;
        let sector_names = SectorRepository::new(self.db)
            .names_by_ids(&sector_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let owner_name = owner_names
                    .get(&entity.owner_id)
                    .cloned()
                    .unwrap_or_default();
                let sector_name = entity
                    .sector_id
                    .and_then(|id| sector_names.get(&id).cloned());
                Initiative::from_entity(entity, owner_name, sector_name)
            })
            .collect())
    }
}

/// Wraps the lower-cased search text in `%` wildcards, escaping `\`, `%` and `_` so they
/// match literally.
pub(super) fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `LOWER(column) LIKE pattern ESCAPE '\'`
fn lower_like(column: entity::initiative::Column, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((entity::initiative::Entity, column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

