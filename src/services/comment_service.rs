//! Comment service - creation under a post, listing, author-only mutation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Comment;
use crate::errors::{AppError, AppResult};
use crate::infra::{CommentRepository, PostRepository, UserRepository};

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Create a comment; both the author and the post must exist
    async fn create_comment(&self, user_id: i64, post_id: i64, content: String)
        -> AppResult<Comment>;

    /// Get comment by ID
    async fn get_comment(&self, id: i64) -> AppResult<Comment>;

    /// List all comments on an existing post, oldest first
    async fn get_comments_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>>;

    /// Replace comment content; only the author may update
    async fn update_comment(&self, id: i64, caller_id: i64, content: String)
        -> AppResult<Comment>;

    /// Delete comment; only the author may delete
    async fn delete_comment(&self, id: i64, caller_id: i64) -> AppResult<()>;
}

/// Concrete implementation of CommentService over the repositories.
pub struct CommentManager {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommentManager {
    /// Create new comment service instance
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comments,
            posts,
            users,
        }
    }
}

#[async_trait]
impl CommentService for CommentManager {
    async fn create_comment(
        &self,
        user_id: i64,
        post_id: i64,
        content: String,
    ) -> AppResult<Comment> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Comment content cannot be empty"));
        }

        // Both parents must exist, user checked first
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound);
        }
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.comments.create(user_id, post_id, content).await
    }

    async fn get_comment(&self, id: i64) -> AppResult<Comment> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_comments_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.comments.list_by_post(post_id).await
    }

    async fn update_comment(
        &self,
        id: i64,
        caller_id: i64,
        content: String,
    ) -> AppResult<Comment> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if content.trim().is_empty() {
            return Err(AppError::validation("Content cannot be empty"));
        }

        if comment.user_id != caller_id {
            return Err(AppError::Forbidden);
        }

        self.comments.update_content(id, content).await
    }

    async fn delete_comment(&self, id: i64, caller_id: i64) -> AppResult<()> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if comment.user_id != caller_id {
            return Err(AppError::Forbidden);
        }

        self.comments.delete(id).await
    }
}
