use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, initiative::InitiativeRepository},
    error::AppError,
    model::{comment::Comment, user::User},
};

const MIN_CONTENT_LEN: usize = 3;
const MAX_CONTENT_LEN: usize = 1000;

fn validate_content(content: &str) -> Result<String, AppError> {
    let content = content.trim();
    let len = content.chars().count();

    if len < MIN_CONTENT_LEN {
        return Err(AppError::bad_request(
            "comentário deve ter no mínimo 3 caracteres",
        ));
    }
    if len > MAX_CONTENT_LEN {
        return Err(AppError::bad_request(
            "comentário deve ter no máximo 1000 caracteres",
        ));
    }

    Ok(content.to_string())
}

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment by `author` to an initiative.
    pub async fn create(
        &self,
        initiative_id: i32,
        author: &User,
        content: &str,
    ) -> Result<Comment, AppError> {
        let content = validate_content(content)?;

        if InitiativeRepository::new(self.db)
            .find_by_id(initiative_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("iniciativa não encontrada"));
        }

        Ok(CommentRepository::new(self.db)
            .create(initiative_id, author.id, content)
            .await?)
    }

    /// Edits a comment. Only the author or an admin may edit.
    pub async fn update(&self, id: i32, user: &User, content: &str) -> Result<Comment, AppError> {
        let content = validate_content(content)?;
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("comentário não encontrado"))?;
        if comment.user_id != user.id && !user.is_admin() {
            return Err(AppError::forbidden(
                "você não tem permissão para editar este comentário",
            ));
        }

        repo.update(id, content)
            .await?
            .ok_or_else(|| AppError::not_found("comentário não encontrado"))
    }

    /// Removes a comment. Only the author or an admin may delete.
    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("comentário não encontrado"))?;
        if comment.user_id != user.id && !user.is_admin() {
            return Err(AppError::forbidden(
                "você não tem permissão para deletar este comentário",
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Lists the comments of an initiative, oldest first.
    pub async fn get_by_initiative(&self, initiative_id: i32) -> Result<Vec<Comment>, AppError> {
        if InitiativeRepository::new(self.db)
            .find_by_id(initiative_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("iniciativa não encontrada"));
        }

        Ok(CommentRepository::new(self.db)
            .get_by_initiative(initiative_id)
            .await?)
    }
}
