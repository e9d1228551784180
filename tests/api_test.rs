//! Integration tests for API-facing types.
//!
//! These tests use hand-rolled mock services to exercise the service traits
//! without requiring a database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;

use socialnet::domain::{Comment, Post, User, UserResponse};
use socialnet::errors::{AppError, AppResult};
use socialnet::services::{
    AuthService, Claims, CommentService, PostService, TokenResponse, UserService,
};
use socialnet::types::MessageResponse;

// =============================================================================
// Test Fixtures
// =============================================================================

fn test_user(id: i64) -> User {
    User {
        id,
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password_hash: "$argon2id$stored-hash".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_post(id: i64, user_id: i64) -> Post {
    Post {
        id,
        user_id,
        content: "hello world".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_comment(id: i64, user_id: i64, post_id: i64) -> Comment {
    Comment {
        id,
        user_id,
        post_id,
        content: "nice post".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock auth service that returns predefined responses
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        username: String,
        email: String,
        _password: String,
    ) -> AppResult<User> {
        let mut user = test_user(1);
        user.username = username;
        user.email = email;
        Ok(user)
    }

    async fn login(&self, email: String, _password: String) -> AppResult<(User, TokenResponse)> {
        let mut user = test_user(1);
        user.email = email;
        Ok((
            user,
            TokenResponse {
                access_token: "mock-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 86400,
            },
        ))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == "valid-test-token" {
            Ok(Claims {
                sub: 1,
                email: "a@x.com".to_string(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Mock user service for testing
struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        Ok(test_user(id))
    }

    async fn update_user(
        &self,
        _id: i64,
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<()> {
        if username.is_none() && email.is_none() && password.is_none() {
            return Err(AppError::validation("No fields provided to update"));
        }
        Ok(())
    }

    async fn delete_user(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Mock post service that serves a fixed newest-first feed
struct MockPostService;

#[async_trait]
impl PostService for MockPostService {
    async fn create_post(&self, user_id: i64, content: String) -> AppResult<Post> {
        let mut post = test_post(1, user_id);
        post.content = content;
        Ok(post)
    }

    async fn get_all_posts(&self) -> AppResult<Vec<Post>> {
        // Newest first, as the repository orders the feed
        let mut newer = test_post(2, 1);
        newer.created_at = Utc::now();
        let mut older = test_post(1, 1);
        older.created_at = newer.created_at - chrono::Duration::hours(1);
        Ok(vec![newer, older])
    }

    async fn get_post(&self, id: i64) -> AppResult<Post> {
        Ok(test_post(id, 1))
    }

    async fn update_post(&self, id: i64, caller_id: i64, content: String) -> AppResult<Post> {
        let post = test_post(id, 1);
        if post.user_id != caller_id {
            return Err(AppError::Forbidden);
        }
        let mut post = post;
        post.content = content;
        Ok(post)
    }

    async fn delete_post(&self, _id: i64, caller_id: i64) -> AppResult<()> {
        if caller_id != 1 {
            return Err(AppError::Forbidden);
        }
        Ok(())
    }
}

/// Mock comment service for testing
struct MockCommentService;

#[async_trait]
impl CommentService for MockCommentService {
    async fn create_comment(
        &self,
        user_id: i64,
        post_id: i64,
        content: String,
    ) -> AppResult<Comment> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Comment content cannot be empty"));
        }
        Ok(test_comment(1, user_id, post_id))
    }

    async fn get_comment(&self, id: i64) -> AppResult<Comment> {
        Ok(test_comment(id, 1, 1))
    }

    async fn get_comments_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        Ok(vec![test_comment(1, 1, post_id), test_comment(2, 1, post_id)])
    }

    async fn update_comment(&self, id: i64, _caller_id: i64, content: String) -> AppResult<Comment> {
        let mut comment = test_comment(id, 1, 1);
        comment.content = content;
        Ok(comment)
    }

    async fn delete_comment(&self, _id: i64, _caller_id: i64) -> AppResult<()> {
        Ok(())
    }
}

// =============================================================================
// Response Shaping Tests
// =============================================================================

#[tokio::test]
async fn serialized_user_has_no_password_field() {
    let user = test_user(1);
    let value = serde_json::to_value(&user).expect("User serializes");

    let object = value.as_object().expect("User serializes to an object");
    assert!(!object.contains_key("password_hash"));
    assert!(!object.contains_key("password"));
    assert_eq!(object["email"], "a@x.com");
}

#[tokio::test]
async fn user_response_carries_no_password_material() {
    let response = UserResponse::from(test_user(1));
    let value = serde_json::to_value(&response).expect("UserResponse serializes");

    let object = value.as_object().expect("UserResponse serializes to an object");
    assert!(!object.contains_key("password_hash"));
    assert!(!object.contains_key("password"));
    assert_eq!(object["id"], 1);
    assert_eq!(object["username"], "alice");
}

#[tokio::test]
async fn message_response_serializes_message_only() {
    let response = MessageResponse::new("Post deleted successfully");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value, serde_json::json!({"message": "Post deleted successfully"}));
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn error_variants_map_to_expected_status_codes() {
    use axum::response::IntoResponse;

    let cases = [
        (AppError::NotFound, StatusCode::NOT_FOUND),
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (AppError::Forbidden, StatusCode::FORBIDDEN),
        (AppError::conflict("Email"), StatusCode::CONFLICT),
        (
            AppError::validation("Content cannot be empty"),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::internal("boom"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

// =============================================================================
// Mock Service Tests
// =============================================================================

#[tokio::test]
async fn mock_auth_service_verify_valid_token() {
    let service = MockAuthService;
    let claims = service.verify_token("valid-test-token").unwrap();

    assert_eq!(claims.sub, 1);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn mock_auth_service_verify_invalid_token() {
    let service = MockAuthService;
    let result = service.verify_token("invalid-token");

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn mock_auth_service_login_returns_bearer_token() {
    let service = MockAuthService;
    let (user, token) = service
        .login("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    assert_eq!(user.email, "a@x.com");
    assert_eq!(token.token_type, "Bearer");
    assert!(!token.access_token.is_empty());
}

#[tokio::test]
async fn mock_user_service_update_requires_a_field() {
    let service = MockUserService;
    let result = service.update_user(1, None, None, None).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn mock_post_service_feed_is_newest_first() {
    let service = MockPostService;
    let feed = service.get_all_posts().await.unwrap();

    assert_eq!(feed.len(), 2);
    assert!(feed[0].created_at >= feed[1].created_at);
}

#[tokio::test]
async fn mock_post_service_rejects_foreign_mutation() {
    let service = MockPostService;
    let result = service.update_post(1, 99, "edited".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::Forbidden));
}

#[tokio::test]
async fn mock_comment_service_rejects_blank_content() {
    let service = MockCommentService;
    let result = service.create_comment(1, 1, "  ".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}
