//! Post service - creation, feed, and author-only mutation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Post;
use crate::errors::{AppError, AppResult};
use crate::infra::{PostRepository, UserRepository};

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post for an existing user
    async fn create_post(&self, user_id: i64, content: String) -> AppResult<Post>;

    /// List all posts, newest first
    async fn get_all_posts(&self) -> AppResult<Vec<Post>>;

    /// Get post by ID
    async fn get_post(&self, id: i64) -> AppResult<Post>;

    /// Replace post content; only the author may update
    async fn update_post(&self, id: i64, caller_id: i64, content: String) -> AppResult<Post>;

    /// Delete post; only the author may delete
    async fn delete_post(&self, id: i64, caller_id: i64) -> AppResult<()>;
}

/// Concrete implementation of PostService over the repositories.
pub struct PostManager {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostManager {
    /// Create new post service instance
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(&self, user_id: i64, content: String) -> AppResult<Post> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Post content cannot be empty"));
        }

        // Author must exist at creation time
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.posts.create(user_id, content).await
    }

    async fn get_all_posts(&self) -> AppResult<Vec<Post>> {
        self.posts.list_all().await
    }

    async fn get_post(&self, id: i64) -> AppResult<Post> {
        self.posts.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn update_post(&self, id: i64, caller_id: i64, content: String) -> AppResult<Post> {
        let post = self.posts.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if content.trim().is_empty() {
            return Err(AppError::validation("Content cannot be empty"));
        }

        if post.user_id != caller_id {
            return Err(AppError::Forbidden);
        }

        self.posts.update_content(id, content).await
    }

    async fn delete_post(&self, id: i64, caller_id: i64) -> AppResult<()> {
        let post = self.posts.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if post.user_id != caller_id {
            return Err(AppError::Forbidden);
        }

        self.posts.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::{MockPostRepository, MockUserRepository};
    use chrono::Utc;

    fn test_user(id: i64) -> User {
        let now = Utc::now();
        User {
            id,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn test_post(id: i64, user_id: i64) -> Post {
        let now = Utc::now();
        Post {
            id,
            user_id,
            content: "hello".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_rejects_whitespace_content() {
        let service = PostManager::new(
            Arc::new(MockPostRepository::new()),
            Arc::new(MockUserRepository::new()),
        );

        let result = service.create_post(1, "   ".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_for_unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = PostManager::new(Arc::new(MockPostRepository::new()), Arc::new(users));
        let result = service.create_post(9999, "hi".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn create_returns_store_assigned_id() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id))));
        let mut posts = MockPostRepository::new();
        posts
            .expect_create()
            .returning(|user_id, _| Ok(test_post(5, user_id)));

        let service = PostManager::new(Arc::new(posts), Arc::new(users));
        let post = service.create_post(1, "hello world".to_string()).await.unwrap();

        assert_eq!(post.id, 5);
        assert_eq!(post.user_id, 1);
    }

    #[tokio::test]
    async fn get_all_returns_feed() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_list_all()
            .returning(|| Ok(vec![test_post(2, 1), test_post(1, 1)]));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let feed = service.get_all_posts().await.unwrap();

        assert_eq!(feed.len(), 2);
    }

    #[tokio::test]
    async fn get_unknown_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(None));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let result = service.get_post(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn update_unknown_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(None));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let result = service.update_post(42, 1, "new".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn update_rejects_empty_content() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1))));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let result = service.update_post(1, 1, "".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_by_non_author_is_forbidden() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1))));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let result = service.update_post(1, 2, "new".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }

    #[tokio::test]
    async fn update_by_author_succeeds() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1))));
        posts.expect_update_content().returning(|id, content| {
            let mut post = test_post(id, 1);
            post.content = content;
            Ok(post)
        });

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let post = service.update_post(1, 1, "edited".to_string()).await.unwrap();

        assert_eq!(post.content, "edited");
    }

    #[tokio::test]
    async fn delete_by_non_author_is_forbidden() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1))));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let result = service.delete_post(1, 2).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }

    #[tokio::test]
    async fn delete_by_author_succeeds() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_post(id, 1))));
        posts.expect_delete().returning(|_| Ok(()));

        let service = PostManager::new(Arc::new(posts), Arc::new(MockUserRepository::new()));
        let result = service.delete_post(1, 1).await;

        assert!(result.is_ok());
    }
}
