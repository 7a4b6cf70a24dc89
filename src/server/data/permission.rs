//! Role and route-permission repository.
//!
//! Roles (`user_type`) link to users through `type_user`. Each role owns a set of
//! `(endpoint pattern, method)` rows in `user_type_permissions` consulted by the
//! permission middleware.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::UserType;

pub struct PermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the endpoint patterns any of the user's roles grants for a method.
    ///
    /// # Arguments
    /// - `user_id` - User whose roles are consulted
    /// - `method` - HTTP method, upper case
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Stored patterns such as `/api/private/initiatives/{id}`
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_methods_patterns(
        &self,
        user_id: i32,
        method: &str,
    ) -> Result<Vec<String>, DbErr> {
        let type_ids: Vec<i32> = entity::prelude::TypeUser::find()
            .select_only()
            .column(entity::type_user::Column::UserTypeId)
            .filter(entity::type_user::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if type_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::UserTypePermission::find()
            .select_only()
            .column(entity::user_type_permission::Column::Endpoint)
            .filter(entity::user_type_permission::Column::UserTypeId.is_in(type_ids))
            .filter(entity::user_type_permission::Column::Method.eq(method))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Links a role to a user. Linking an already linked role is a no-op.
    pub async fn assign_user_type(&self, user_id: i32, user_type_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::TypeUser::find()
            .filter(entity::type_user::Column::UserId.eq(user_id))
            .filter(entity::type_user::Column::UserTypeId.eq(user_type_id))
            .count(self.db)
            .await?;

        if existing > 0 {
            return Ok(());
        }

        entity::type_user::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            user_type_id: ActiveValue::Set(user_type_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Unlinks a role from a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - User did not hold the role
    pub async fn remove_user_type(&self, user_id: i32, user_type_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TypeUser::delete_many()
            .filter(entity::type_user::Column::UserId.eq(user_id))
            .filter(entity::type_user::Column::UserTypeId.eq(user_type_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Unlinks every role from a user.
    pub async fn remove_all_user_types(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::TypeUser::delete_many()
            .filter(entity::type_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets every role ordered by ID.
    pub async fn get_all_user_types(&self) -> Result<Vec<UserType>, DbErr> {
        let types = entity::prelude::UserType::find()
            .order_by_asc(entity::user_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(UserType::from_entity).collect())
    }

    pub async fn find_user_type(&self, id: i32) -> Result<Option<UserType>, DbErr> {
        let user_type = entity::prelude::UserType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(user_type.map(UserType::from_entity))
    }

    pub async fn find_user_type_by_name(&self, name: &str) -> Result<Option<UserType>, DbErr> {
        let user_type = entity::prelude::UserType::find()
            .filter(entity::user_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(user_type.map(UserType::from_entity))
    }
}
