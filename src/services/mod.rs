//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repository layer to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion: every manager holds injected `Arc<dyn Repository>`
//! handles, so tests substitute doubles without touching the store.

mod auth_service;
mod comment_service;
mod post_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use comment_service::{CommentManager, CommentService};
pub use post_service::{PostManager, PostService};
pub use user_service::{UserManager, UserService};
