use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        initiative::InitiativeRepository,
        permission::PermissionRepository,
        sector::SectorRepository,
        user::{NewUser, UserRepository},
    },
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
    util::password::{hash_password, verify_password},
};

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// User administration: accounts, roles, sector membership and passwords.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, hashes the password and assigns the requested roles.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user with roles and sector name
    /// - `Err(AppError::BadRequest)` - Invalid email, short name or password, duplicate email,
    ///   unknown sector or unknown role
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        if !is_valid_email(&param.email) {
            return Err(AppError::bad_request("email inválido"));
        }
        if param.name.chars().count() < MIN_NAME_LEN {
            return Err(AppError::bad_request("nome deve ter no mínimo 3 caracteres"));
        }
        if param.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::bad_request("senha deve ter no mínimo 6 caracteres"));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&param.email, None).await? {
            return Err(AppError::bad_request("email já cadastrado"));
        }
        if let Some(sector_id) = param.sector_id {
            self.ensure_sector(sector_id).await?;
        }
        self.ensure_user_types(&param.type_ids).await?;

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(NewUser {
                email: param.email,
                name: param.name,
                password_hash,
                sector_id: param.sector_id,
            })
            .await?;

        let permission_repo = PermissionRepository::new(self.db);
        for type_id in &param.type_ids {
            permission_repo.assign_user_type(user.id, *type_id).await?;
        }

        tracing::info!("Created user {} ({})", user.id, user.email);

        self.get_by_id(user.id).await
    }

    /// Applies a partial update. `type_ids`, when given, replaces every role of the user.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Validation failed
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("usuário não encontrado"));
        }

        if let Some(email) = &param.email {
            if !is_valid_email(email) {
                return Err(AppError::bad_request("email inválido"));
            }
            if user_repo.email_exists(email, Some(id)).await? {
                return Err(AppError::bad_request("email já cadastrado"));
            }
        }
        if let Some(name) = &param.name {
            if name.chars().count() < MIN_NAME_LEN {
                return Err(AppError::bad_request("nome deve ter no mínimo 3 caracteres"));
            }
        }
        if let Some(sector_id) = param.sector_id {
            self.ensure_sector(sector_id).await?;
        }
        if let Some(type_ids) = &param.type_ids {
            self.ensure_user_types(type_ids).await?;
        }

        user_repo.update(id, &param).await?;

        if let Some(type_ids) = &param.type_ids {
            let permission_repo = PermissionRepository::new(self.db);
            permission_repo.remove_all_user_types(id).await?;
            for type_id in type_ids {
                permission_repo.assign_user_type(id, *type_id).await?;
            }
        }

        self.get_by_id(id).await
    }

    /// Deletes a user together with their role links.
    ///
    /// Users that still own initiatives are kept so the initiatives do not lose their owner.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("usuário não encontrado"));
        }

        let owned = InitiativeRepository::new(self.db)
            .count_by_owner(id)
            .await?;
        if owned > 0 {
            return Err(AppError::bad_request(format!(
                "não é possível deletar o usuário pois existem {} iniciativa(s) vinculada(s)",
                owned
            )));
        }

        PermissionRepository::new(self.db)
            .remove_all_user_types(id)
            .await?;
        user_repo.delete(id).await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("usuário não encontrado"))
    }

    /// Lists every user ordered by name.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Replaces the password after verifying the current one.
    pub async fn change_password(
        &self,
        id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_by_id(id).await?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(AppError::bad_request("senha atual incorreta"));
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::bad_request(
                "nova senha deve ter no mínimo 6 caracteres",
            ));
        }

        let password_hash = hash_password(new_password)?;
        UserRepository::new(self.db)
            .update_password(id, password_hash)
            .await?;

        Ok(())
    }

    async fn ensure_sector(&self, sector_id: i32) -> Result<(), AppError> {
        if SectorRepository::new(self.db)
            .find_by_id(sector_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request("setor não encontrado"));
        }

        Ok(())
    }

    async fn ensure_user_types(&self, type_ids: &[i32]) -> Result<(), AppError> {
        let permission_repo = PermissionRepository::new(self.db);
        for type_id in type_ids {
            if permission_repo.find_user_type(*type_id).await?.is_none() {
                return Err(AppError::bad_request(format!(
                    "tipo de usuário {} não encontrado",
                    type_id
                )));
            }
        }

        Ok(())
    }
}
