//! Comment domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Comment domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identifier
    pub id: i64,
    /// Author of the comment
    pub user_id: i64,
    /// Post the comment belongs to
    pub post_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment response returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    /// Unique comment identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Author user id
    #[schema(example = 1)]
    pub user_id: i64,
    /// Parent post id
    #[schema(example = 1)]
    pub post_id: i64,
    /// Comment body
    #[schema(example = "nice post")]
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            post_id: comment.post_id,
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
