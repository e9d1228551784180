//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each trait covers one entity table with insert, equality lookups,
//! ordered listing, partial update, and delete.

mod comment_repository;
pub(crate) mod entities;
mod post_repository;
mod user_repository;

pub use comment_repository::{CommentRepository, CommentStore};
pub use post_repository::{PostRepository, PostStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use post_repository::MockPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
