//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, comment_handler, post_handler, user_handler};
use crate::domain::{CommentResponse, PostResponse, UserResponse};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Social Network API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Network API",
        version = "0.1.0",
        description = "Social network CRUD backend: users, posts, and comments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::get_current_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Post endpoints
        post_handler::create_post,
        post_handler::list_posts,
        post_handler::get_post,
        post_handler::update_post,
        post_handler::delete_post,
        // Comment endpoints
        comment_handler::create_comment,
        comment_handler::get_comment,
        comment_handler::get_comments_by_post,
        comment_handler::update_comment,
        comment_handler::delete_comment,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            PostResponse,
            CommentResponse,
            TokenResponse,
            MessageResponse,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::RegisterResponse,
            auth_handler::LoginResponse,
            // User handler types
            user_handler::UpdateUserRequest,
            // Post handler types
            post_handler::CreatePostRequest,
            post_handler::UpdatePostRequest,
            post_handler::CreatePostResponse,
            // Comment handler types
            comment_handler::CreateCommentRequest,
            comment_handler::UpdateCommentRequest,
            comment_handler::CreateCommentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "User account operations"),
        (name = "Posts", description = "Post feed and management"),
        (name = "Comments", description = "Comments on posts")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
