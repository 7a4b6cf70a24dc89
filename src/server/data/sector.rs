//! Sector data repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::sector::{
    CreateSectorParam, Sector, SectorWithUserCount, UpdateSectorParam,
};

pub struct SectorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new sector.
    ///
    /// # Returns
    /// - `Ok(Sector)` - The created sector
    /// - `Err(DbErr)` - Database error, including unique violation on name
    pub async fn create(&self, param: CreateSectorParam) -> Result<Sector, DbErr> {
        let now = Utc::now();

        let entity = entity::sector::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            active: ActiveValue::Set(param.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Sector::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sector>, DbErr> {
        let entity = entity::prelude::Sector::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Sector::from_entity))
    }

    /// Finds a sector by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Sector>, DbErr> {
        let entity = entity::prelude::Sector::find()
            .filter(entity::sector::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Sector::from_entity))
    }

    /// Lists sectors ordered by name, each with its linked user count.
    ///
    /// # Arguments
    /// - `active_only` - Skip sectors flagged inactive
    ///
    /// # Returns
    /// - `Ok(Vec<SectorWithUserCount>)` - Sectors with counts (0 when no users)
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<SectorWithUserCount>, DbErr> {
        let mut query =
            entity::prelude::Sector::find().order_by_asc(entity::sector::Column::Name);
        if active_only {
            query = query.filter(entity::sector::Column::Active.eq(true));
        }
        let sectors = query.all(self.db).await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        let linked = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::SectorId)
            .filter(entity::user::Column::SectorId.is_not_null())
            .into_tuple::<Option<i32>>()
            .all(self.db)
            .await?;
        for sector_id in linked.into_iter().flatten() {
            *counts.entry(sector_id).or_default() += 1;
        }

        Ok(sectors
            .into_iter()
            .map(|entity| {
                let user_count = counts.get(&entity.id).copied().unwrap_or(0);
                SectorWithUserCount {
                    sector: Sector::from_entity(entity),
                    user_count,
                }
            })
            .collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Sector))` - Updated sector
    /// - `Ok(None)` - No sector with that ID
    pub async fn update(&self, id: i32, param: UpdateSectorParam) -> Result<Option<Sector>, DbErr> {
        let Some(entity) = entity::prelude::Sector::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(flag) = param.active {
            active.active = ActiveValue::Set(flag);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Sector::from_entity(entity)))
    }

    /// # Returns
    /// - `Ok(true)` - Sector deleted
    /// - `Ok(false)` - No sector with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Sector::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts users linked to a sector.
    pub async fn count_users(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::SectorId.eq(id))
            .count(self.db)
            .await
    }

    /// Maps sector IDs to names. Unknown IDs are absent from the map.
    pub async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sectors = entity::prelude::Sector::find()
            .filter(entity::sector::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(sectors.into_iter().map(|s| (s.id, s.name)).collect())
    }
}
