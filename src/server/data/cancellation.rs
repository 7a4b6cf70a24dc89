//! Cancellation request repository.
//!
//! At most one request per initiative may be pending. Services check first; a partial
//! unique index backs the rule, so a racing insert surfaces as a unique-constraint error.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::{
        cancellation::{CancellationRequest, CreateCancellationParam},
        review::RequestStatus,
    },
};

pub struct CancellationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CancellationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending request.
    ///
    /// # Returns
    /// - `Ok(CancellationRequest)` - The created request
    /// - `Err(DbErr)` - Database error; a unique violation means another request is pending
    pub async fn create(
        &self,
        param: CreateCancellationParam,
    ) -> Result<CancellationRequest, DbErr> {
        let entity = entity::cancellation_request::ActiveModel {
            initiative_id: ActiveValue::Set(param.initiative_id),
            requested_by_user_id: ActiveValue::Set(param.requested_by_user_id),
            reason: ActiveValue::Set(param.reason),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            reviewed_by_user_id: ActiveValue::Set(None),
            review_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("cancellation request".to_string()))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CancellationRequest>, DbErr> {
        let Some(entity) = entity::prelude::CancellationRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Checks whether the initiative already has a pending request.
    pub async fn has_pending(&self, initiative_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CancellationRequest::find()
            .filter(entity::cancellation_request::Column::InitiativeId.eq(initiative_id))
            .filter(
                entity::cancellation_request::Column::Status.eq(RequestStatus::Pending.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists pending requests, newest first.
    pub async fn list_pending(&self) -> Result<Vec<CancellationRequest>, DbErr> {
        let entities = entity::prelude::CancellationRequest::find()
            .filter(
                entity::cancellation_request::Column::Status.eq(RequestStatus::Pending.as_str()),
            )
            .order_by_desc(entity::cancellation_request::Column::CreatedAt)
            .order_by_desc(entity::cancellation_request::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Maps each initiative to its most recent request, whatever its status.
    pub async fn latest_for_initiatives(
        &self,
        initiative_ids: &[i32],
    ) -> Result<HashMap<i32, CancellationRequest>, DbErr> {
        if initiative_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::CancellationRequest::find()
            .filter(
                entity::cancellation_request::Column::InitiativeId
                    .is_in(initiative_ids.iter().copied()),
            )
            .order_by_desc(entity::cancellation_request::Column::CreatedAt)
            .order_by_desc(entity::cancellation_request::Column::Id)
            .all(self.db)
            .await?;

        let mut latest = HashMap::new();
        for request in self.hydrate(entities).await? {
            latest.entry(request.initiative_id).or_insert(request);
        }

        Ok(latest)
    }

    /// Records a decision on a pending request.
    ///
    /// Only a request still pending is updated, so two concurrent reviews cannot both win.
    ///
    /// # Returns
    /// - `Ok(true)` - Request moved to `status`
    /// - `Ok(false)` - Request missing or no longer pending
    pub async fn review(
        &self,
        id: i32,
        status: RequestStatus,
        reviewer_id: i32,
        review_reason: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::CancellationRequest::update_many()
            .filter(entity::cancellation_request::Column::Id.eq(id))
            .filter(
                entity::cancellation_request::Column::Status.eq(RequestStatus::Pending.as_str()),
            )
            .col_expr(
                entity::cancellation_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::cancellation_request::Column::ReviewedByUserId,
                Expr::value(reviewer_id),
            )
            .col_expr(
                entity::cancellation_request::Column::ReviewReason,
                Expr::value(review_reason),
            )
            .col_expr(
                entity::cancellation_request::Column::ReviewedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves initiative titles and user names for a batch of rows, preserving order.
    async fn hydrate(
        &self,
        entities: Vec<entity::cancellation_request::Model>,
    ) -> Result<Vec<CancellationRequest>, DbErr> {
        let initiative_ids: Vec<i32> = entities.iter().map(|r| r.initiative_id).collect();
        let user_ids: Vec<i32> = entities
            .iter()
            .flat_map(|r| std::iter::once(r.requested_by_user_id).chain(r.reviewed_by_user_id))
            .collect();

        let titles: HashMap<i32, String> = if initiative_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Initiative::find()
                .filter(entity::initiative::Column::Id.is_in(initiative_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|i| (i.id, i.title))
                .collect()
        };
        let names = UserRepository::new(self.db).names_by_ids(&user_ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let title = titles
                    .get(&entity.initiative_id)
                    .cloned()
                    .unwrap_or_default();
                let requested_by = names
                    .get(&entity.requested_by_user_id)
                    .cloned()
                    .unwrap_or_default();
                let reviewed_by = entity
                    .reviewed_by_user_id
                    .and_then(|id| names.get(&id).cloned());
                CancellationRequest::from_entity(entity, title, requested_by, reviewed_by)
            })
            .collect())
    }
}
