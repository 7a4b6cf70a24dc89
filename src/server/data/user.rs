//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are returned as domain models with their sector name and roles resolved, loaded
//! in batches so listings cost a fixed number of queries.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::sector::SectorRepository,
    model::user::{UpdateUserParam, User, UserType},
};

/// Values for a new user row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub sector_id: Option<i32>,
}

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user without roles.
    ///
    /// # Arguments
    /// - `user` - Email, name, password hash and optional sector
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with sector name resolved
    /// - `Err(DbErr)` - Database error, including unique violation on email
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(user.email),
            name: ActiveValue::Set(user.name),
            password_hash: ActiveValue::Set(user.password_hash),
            sector_id: ActiveValue::Set(user.sector_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut users = self.hydrate(vec![entity]).await?;
        users
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("user after insert".to_string()))
    }

    /// Finds a user by ID with sector name and roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Finds a user by exact email with sector name and roles.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Checks whether an email is already taken by another user.
    ///
    /// # Arguments
    /// - `email` - Email to check
    /// - `exclude_id` - User allowed to hold the email (the one being updated)
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets every user ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Counts all users; zero means first start.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Applies a partial update to email, name and sector.
    ///
    /// Role changes in `param.type_ids` are not handled here.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: &UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(email) = &param.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(name) = &param.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(sector_id) = param.sector_id {
            active.sector_id = ActiveValue::Set(Some(sector_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user row. Role links must be removed first.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Maps user IDs to display names. Unknown IDs are absent from the map.
    pub async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
    }

    /// Resolves sector names and roles for a batch of user rows, preserving order.
    async fn hydrate(&self, entities: Vec<entity::user::Model>) -> Result<Vec<User>, DbErr> {
        let user_ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let sector_ids: Vec<i32> = entities.iter().filter_map(|u| u.sector_id).collect();

        let sector_names = SectorRepository::new(self.db)
            .names_by_ids(&sector_ids)
            .await?;

        let mut types_by_user: HashMap<i32, Vec<UserType>> = HashMap::new();
        if !user_ids.is_empty() {
            let links = entity::prelude::TypeUser::find()
                .filter(entity::type_user::Column::UserId.is_in(user_ids))
                .find_also_related(entity::prelude::UserType)
                .order_by_asc(entity::type_user::Column::UserTypeId)
                .all(self.db)
                .await?;

            for (link, user_type) in links {
                if let Some(user_type) = user_type {
                    types_by_user
                        .entry(link.user_id)
                        .or_default()
                        .push(UserType::from_entity(user_type));
                }
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let sector_name = entity
                    .sector_id
                    .and_then(|id| sector_names.get(&id).cloned());
                let user_types = types_by_user.remove(&entity.id).unwrap_or_default();
                User::from_entity(entity, sector_name, user_types)
            })
            .collect())
    }
}
