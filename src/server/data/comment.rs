//! Comment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        initiative_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            initiative_id: ActiveValue::Set(initiative_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let row = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(comment, user)| {
            Comment::from_entity(comment, user.map(|u| u.name).unwrap_or_default())
        }))
    }

    /// Lists an initiative's comments oldest first.
    pub async fn get_by_initiative(&self, initiative_id: i32) -> Result<Vec<Comment>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::InitiativeId.eq(initiative_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, user)| {
                Comment::from_entity(comment, user.map(|u| u.name).unwrap_or_default())
            })
            .collect())
    }

    /// Replaces the content of a comment.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Updated comment
    /// - `Ok(None)` - No comment with that ID
    pub async fn update(&self, id: i32, content: String) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.content = ActiveValue::Set(content);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(self.with_author(entity).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_author(&self, entity: entity::comment::Model) -> Result<Comment, DbErr> {
        let author = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(
            entity,
            author.map(|u| u.name).unwrap_or_default(),
        ))
    }
}
