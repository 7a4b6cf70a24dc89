//! Role assignment and route authorization.

use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::AppError,
    model::user::{User, UserType},
};

/// Checks whether a concrete request path matches a stored route pattern.
///
/// Literal segments must match exactly; each `{name}` placeholder matches one non-empty path
/// segment. The whole path must match.
///
/// # Arguments
/// - `path` - Request path, e.g. `/api/private/initiatives/42`
/// - `pattern` - Stored pattern, e.g. `/api/private/initiatives/{id}`
///
/// # Returns
/// - `true` - Path matches the pattern
/// - `false` - No match, or the pattern could not be compiled
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    let mut expr = String::from("^");
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        expr.push_str(&regex::escape(&rest[..start]));
        expr.push_str("[^/]+");
        rest = &rest[start + len + 1..];
    }
    expr.push_str(&regex::escape(rest));
    expr.push('$');

    match Regex::new(&expr) {
        Ok(re) => re.is_match(path),
        Err(err) => {
            tracing::warn!("Invalid permission pattern {}: {}", pattern, err);
            false
        }
    }
}

pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether any of the user's roles grants `method` on `path`.
    ///
    /// # Returns
    /// - `Ok(true)` - A permission row matches
    /// - `Ok(false)` - No row matches
    /// - `Err(AppError)` - Lookup failed; callers must deny
    pub async fn has_permission(
        &self,
        user_id: i32,
        path: &str,
        method: &str,
    ) -> Result<bool, AppError> {
        let patterns = PermissionRepository::new(self.db)
            .get_methods_patterns(user_id, method)
            .await?;

        Ok(patterns
            .iter()
            .any(|pattern| matches_pattern(path, pattern)))
    }

    /// Reloads the user with roles and sector for the personal information page.
    pub async fn get_personal_information(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("usuário não encontrado"))
    }

    pub async fn list_user_types(&self) -> Result<Vec<UserType>, AppError> {
        Ok(PermissionRepository::new(self.db)
            .get_all_user_types()
            .await?)
    }

    /// Grants a role to a user. Granting a role the user already has is a no-op.
    pub async fn assign_user_type(&self, user_id: i32, user_type_id: i32) -> Result<(), AppError> {
        self.ensure_user_and_type(user_id, user_type_id).await?;

        PermissionRepository::new(self.db)
            .assign_user_type(user_id, user_type_id)
            .await?;

        tracing::info!("Assigned user type {} to user {}", user_type_id, user_id);

        Ok(())
    }

    /// Revokes a role from a user.
    ///
    /// # Returns
    /// - `Ok(())` - Role removed
    /// - `Err(AppError::NotFound)` - User, role, or the link between them does not exist
    pub async fn remove_user_type(&self, user_id: i32, user_type_id: i32) -> Result<(), AppError> {
        self.ensure_user_and_type(user_id, user_type_id).await?;

        let removed = PermissionRepository::new(self.db)
            .remove_user_type(user_id, user_type_id)
            .await?;
        if !removed {
            return Err(AppError::not_found("usuário não possui este tipo"));
        }

        tracing::info!("Removed user type {} from user {}", user_type_id, user_id);

        Ok(())
    }

    async fn ensure_user_and_type(&self, user_id: i32, user_type_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("usuário não encontrado"));
        }

        if PermissionRepository::new(self.db)
            .find_user_type(user_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("tipo de usuário não encontrado"));
        }

        Ok(())
    }
}
