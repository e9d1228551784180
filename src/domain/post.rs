//! Post domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier
    pub id: i64,
    /// Author of the post
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post response returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    /// Unique post identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Author user id
    #[schema(example = 1)]
    pub user_id: i64,
    /// Post body
    #[schema(example = "hello world")]
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
