//! Post repository over the relational store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::post::{self, ActiveModel, Entity as PostEntity};
use crate::domain::Post;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post; the store assigns the id and timestamps
    async fn create(&self, user_id: i64, content: String) -> AppResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>>;

    /// List all posts, newest first
    async fn list_all(&self) -> AppResult<Vec<Post>>;

    /// Replace post content and re-stamp the modification time
    async fn update_content(&self, id: i64, content: String) -> AppResult<Post>;

    /// Delete post by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn create(&self, user_id: i64, content: String) -> AppResult<Post> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            content: Set(content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Post::from))
    }

    async fn list_all(&self) -> AppResult<Vec<Post>> {
        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn update_content(&self, id: i64, content: String) -> AppResult<Post> {
        let post = PostEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = post.into();
        active.content = Set(content);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
