//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services. Repositories
//! are constructed once and injected into the services; nothing reads a
//! process-wide singleton.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{
    CommentRepository, CommentStore, Database, PostRepository, PostStore, UserRepository,
    UserStore,
};
use crate::services::{
    AuthService, Authenticator, CommentManager, CommentService, PostManager, PostService,
    UserManager, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Comment service
    pub comment_service: Arc<dyn CommentService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    ///
    /// Wires the concrete repositories into the services. This is the
    /// production initialization path.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let conn = database.get_connection();

        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(conn.clone()));
        let posts: Arc<dyn PostRepository> = Arc::new(PostStore::new(conn.clone()));
        let comments: Arc<dyn CommentRepository> = Arc::new(CommentStore::new(conn));

        Self {
            auth_service: Arc::new(Authenticator::new(
                users.clone(),
                config.jwt_secret().to_string(),
                config.jwt_expiration_hours,
            )),
            user_service: Arc::new(UserManager::new(users.clone())),
            post_service: Arc::new(PostManager::new(posts.clone(), users.clone())),
            comment_service: Arc::new(CommentManager::new(comments, posts, users)),
            database,
        }
    }

    /// Create application state with manually injected services.
    ///
    /// Intended for tests that substitute service doubles.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        post_service: Arc<dyn PostService>,
        comment_service: Arc<dyn CommentService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            post_service,
            comment_service,
            database,
        }
    }
}
