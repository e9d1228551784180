//! Comment repository over the relational store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use crate::domain::Comment;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment; the store assigns the id and timestamps
    async fn create(&self, user_id: i64, post_id: i64, content: String) -> AppResult<Comment>;

    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>>;

    /// List all comments on a post, oldest first
    async fn list_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>>;

    /// Replace comment content and re-stamp the modification time
    async fn update_content(&self, id: i64, content: String) -> AppResult<Comment>;

    /// Delete comment by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of CommentRepository
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn create(&self, user_id: i64, post_id: i64, content: String) -> AppResult<Comment> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            post_id: Set(post_id),
            content: Set(content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Comment::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        let result = CommentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Comment::from))
    }

    async fn list_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn update_content(&self, id: i64, content: String) -> AppResult<Comment> {
        let comment = CommentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = comment.into();
        active.content = Set(content);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Comment::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = CommentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
