//! User domain models and parameters.
//!
//! Users authenticate with email and password, optionally belong to a sector, and hold any
//! number of roles (`UserType`). Role membership drives both route permissions and the
//! admin/manager checks inside services.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserTypeDto},
    server::model::role::Role,
};

/// Role a user can hold.
#[derive(Debug, Clone, PartialEq)]
pub struct UserType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl UserType {
    pub fn from_entity(entity: entity::user_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> UserTypeDto {
        UserTypeDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// User with resolved sector name and roles.
///
/// Carries the password hash so authentication can verify credentials; `into_dto` never
/// exposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub sector_id: Option<i32>,
    /// Name of the linked sector, if any.
    pub sector_name: Option<String>,
    pub user_types: Vec<UserType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model plus its resolved relations into a domain model.
    ///
    /// # Arguments
    /// - `entity` - User row
    /// - `sector_name` - Name of the sector referenced by `entity.sector_id`
    /// - `user_types` - Roles linked through the association table
    pub fn from_entity(
        entity: entity::user::Model,
        sector_name: Option<String>,
        user_types: Vec<UserType>,
    ) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            sector_id: entity.sector_id,
            sector_name,
            user_types,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user_types
            .iter()
            .any(|t| Role::from_name(&t.name) == Some(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_admin_or_manager(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::Manager)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            sector_id: self.sector_id,
            sector_name: self.sector_name,
            user_types: self
                .user_types
                .into_iter()
                .map(UserType::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub password: String,
    pub sector_id: Option<i32>,
    pub type_ids: Vec<i32>,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            name: dto.name.trim().to_string(),
            password: dto.password,
            sector_id: dto.sector_id,
            type_ids: dto.type_ids,
        }
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub email: Option<String>,
    pub name: Option<String>,
    pub sector_id: Option<i32>,
    /// Replaces every role of the user when present.
    pub type_ids: Option<Vec<i32>>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email.map(|e| e.trim().to_string()),
            name: dto.name.map(|n| n.trim().to_string()),
            sector_id: dto.sector_id,
            type_ids: dto.type_ids,
        }
    }
}
