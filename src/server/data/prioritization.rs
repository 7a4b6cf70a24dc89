//! Prioritization and change-request repository.
//!
//! Ranked initiative IDs are stored as a JSON array in a text column and decoded at the
//! repository boundary.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{sector::SectorRepository, user::UserRepository},
    model::{
        prioritization::{ChangeRequest, Prioritization},
        review::RequestStatus,
    },
    util::parse::{encode_id_list, parse_id_list},
};

pub struct PrioritizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrioritizationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the prioritization of a sector for a year.
    ///
    /// # Returns
    /// - `Ok(Some(Prioritization))` - The sector saved a ranking for that year
    /// - `Ok(None)` - Nothing saved yet
    /// - `Err(DbErr)` - Database error or undecodable stored order
    pub async fn find_by_sector_and_year(
        &self,
        sector_id: i32,
        year: i32,
    ) -> Result<Option<Prioritization>, DbErr> {
        let Some(entity) = entity::prelude::Prioritization::find()
            .filter(entity::prioritization::Column::SectorId.eq(sector_id))
            .filter(entity::prioritization::Column::Year.eq(year))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Prioritization>, DbErr> {
        let Some(entity) = entity::prelude::Prioritization::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Gets every sector's prioritization for a year, ordered by sector ID.
    pub async fn get_all_by_year(&self, year: i32) -> Result<Vec<Prioritization>, DbErr> {
        let entities = entity::prelude::Prioritization::find()
            .filter(entity::prioritization::Column::Year.eq(year))
            .order_by_asc(entity::prioritization::Column::SectorId)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Inserts a locked prioritization.
    ///
    /// # Arguments
    /// - `sector_id` - Owning sector
    /// - `year` - Target year
    /// - `priority_order` - Ranked initiative IDs
    /// - `created_by_user_id` - User saving the ranking
    pub async fn create(
        &self,
        sector_id: i32,
        year: i32,
        priority_order: &[i32],
        created_by_user_id: i32,
    ) -> Result<Prioritization, DbErr> {
        let now = Utc::now();

        let entity = entity::prioritization::ActiveModel {
            sector_id: ActiveValue::Set(sector_id),
            year: ActiveValue::Set(year),
            priority_order: ActiveValue::Set(encode_id_list(priority_order)),
            is_locked: ActiveValue::Set(true),
            created_by_user_id: ActiveValue::Set(created_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("prioritization".to_string()))
    }

    /// Replaces the ranking and locks the prioritization.
    pub async fn update_order(&self, id: i32, priority_order: &[i32]) -> Result<(), DbErr> {
        entity::prelude::Prioritization::update_many()
            .filter(entity::prioritization::Column::Id.eq(id))
            .col_expr(
                entity::prioritization::Column::PriorityOrder,
                Expr::value(encode_id_list(priority_order)),
            )
            .col_expr(entity::prioritization::Column::IsLocked, Expr::value(true))
            .col_expr(
                entity::prioritization::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the lock so the sector can save a new ranking.
    pub async fn unlock(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Prioritization::update_many()
            .filter(entity::prioritization::Column::Id.eq(id))
            .col_expr(entity::prioritization::Column::IsLocked, Expr::value(false))
            .col_expr(
                entity::prioritization::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Inserts a pending change request.
    ///
    /// # Returns
    /// - `Ok(ChangeRequest)` - The created request
    /// - `Err(DbErr)` - Database error; a unique violation means another request is pending
    pub async fn create_change_request(
        &self,
        prioritization_id: i32,
        requested_by_user_id: i32,
        new_priority_order: &[i32],
        reason: String,
    ) -> Result<ChangeRequest, DbErr> {
        let entity = entity::prioritization_change_request::ActiveModel {
            prioritization_id: ActiveValue::Set(prioritization_id),
            requested_by_user_id: ActiveValue::Set(requested_by_user_id),
            new_priority_order: ActiveValue::Set(encode_id_list(new_priority_order)),
            reason: ActiveValue::Set(reason),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            reviewed_by_user_id: ActiveValue::Set(None),
            review_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.hydrate_change_requests(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("change request".to_string()))
    }

    pub async fn find_change_request(&self, id: i32) -> Result<Option<ChangeRequest>, DbErr> {
        let Some(entity) = entity::prelude::PrioritizationChangeRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate_change_requests(vec![entity]).await?.pop())
    }

    pub async fn has_pending_change_request(&self, prioritization_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PrioritizationChangeRequest::find()
            .filter(
                entity::prioritization_change_request::Column::PrioritizationId
                    .eq(prioritization_id),
            )
            .filter(
                entity::prioritization_change_request::Column::Status
                    .eq(RequestStatus::Pending.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists pending change requests, newest first.
    pub async fn list_pending_change_requests(&self) -> Result<Vec<ChangeRequest>, DbErr> {
        let entities = entity::prelude::PrioritizationChangeRequest::find()
            .filter(
                entity::prioritization_change_request::Column::Status
                    .eq(RequestStatus::Pending.as_str()),
            )
            .order_by_desc(entity::prioritization_change_request::Column::CreatedAt)
            .order_by_desc(entity::prioritization_change_request::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate_change_requests(entities).await
    }

    /// Records a decision on a pending change request.
    ///
    /// # Returns
    /// - `Ok(true)` - Request moved to `status`
    /// - `Ok(false)` - Request missing or no longer pending
    pub async fn review_change_request(
        &self,
        id: i32,
        status: RequestStatus,
        reviewer_id: i32,
        review_reason: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::PrioritizationChangeRequest::update_many()
            .filter(entity::prioritization_change_request::Column::Id.eq(id))
            .filter(
                entity::prioritization_change_request::Column::Status
                    .eq(RequestStatus::Pending.as_str()),
            )
            .col_expr(
                entity::prioritization_change_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::prioritization_change_request::Column::ReviewedByUserId,
                Expr::value(reviewer_id),
            )
            .col_expr(
                entity::prioritization_change_request::Column::ReviewReason,
                Expr::value(review_reason),
            )
            .col_expr(
                entity::prioritization_change_request::Column::ReviewedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn hydrate(
        &self,
        entities: Vec<entity::prioritization::Model>,
    ) -> Result<Vec<Prioritization>, DbErr> {
        let sector_ids: Vec<i32> = entities.iter().map(|p| p.sector_id).collect();
        let user_ids: Vec<i32> = entities.iter().map(|p| p.created_by_user_id).collect();

        let sector_names = SectorRepository::new(self.db)
            .names_by_ids(&sector_ids)
            .await?;
        let user_names = UserRepository::new(self.db).names_by_ids(&user_ids).await?;

        entities
            .into_iter()
            .map(|entity| {
                let order = parse_id_list(&entity.priority_order)?;
                let sector_name = sector_names.get(&entity.sector_id).cloned().unwrap_or_default();
                let created_by_name = user_names
                    .get(&entity.created_by_user_id)
                    .cloned()
                    .unwrap_or_default();
                Ok(Prioritization::from_entity(
                    entity,
                    order,
                    sector_name,
                    created_by_name,
                ))
            })
            .collect()
    }

    async fn hydrate_change_requests(
        &self,
        entities: Vec<entity::prioritization_change_request::Model>,
    ) -> Result<Vec<ChangeRequest>, DbErr> {
        let prioritization_ids: Vec<i32> =
            entities.iter().map(|r| r.prioritization_id).collect();
        let user_ids: Vec<i32> = entities
            .iter()
            .flat_map(|r| std::iter::once(r.requested_by_user_id).chain(r.reviewed_by_user_id))
            .collect();

        let prioritizations: HashMap<i32, entity::prioritization::Model> =
            if prioritization_ids.is_empty() {
                HashMap::new()
            } else {
                entity::prelude::Prioritization::find()
                    .filter(entity::prioritization::Column::Id.is_in(prioritization_ids))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|p| (p.id, p))
                    .collect()
            };
        let sector_ids: Vec<i32> = prioritizations.values().map(|p| p.sector_id).collect();
        let sector_names = SectorRepository::new(self.db)
            .names_by_ids(&sector_ids)
            .await?;
        let user_names = UserRepository::new(self.db).names_by_ids(&user_ids).await?;

        entities
            .into_iter()
            .map(|entity| {
                let (sector_id, year) = prioritizations
                    .get(&entity.prioritization_id)
                    .map(|p| (p.sector_id, p.year))
                    .unwrap_or_default();

                Ok(ChangeRequest {
                    id: entity.id,
                    prioritization_id: entity.prioritization_id,
                    sector_id,
                    sector_name: sector_names.get(&sector_id).cloned().unwrap_or_default(),
                    year,
                    requested_by_user_id: entity.requested_by_user_id,
                    requested_by_name: user_names
                        .get(&entity.requested_by_user_id)
                        .cloned()
                        .unwrap_or_default(),
                    new_priority_order: parse_id_list(&entity.new_priority_order)?,
                    reason: entity.reason,
                    status: entity.status,
                    reviewed_by_user_id: entity.reviewed_by_user_id,
                    reviewed_by_name: entity
                        .reviewed_by_user_id
                        .and_then(|id| user_names.get(&id).cloned()),
                    review_reason: entity.review_reason,
                    created_at: entity.created_at,
                    reviewed_at: entity.reviewed_at,
                })
            })
            .collect()
    }
}
