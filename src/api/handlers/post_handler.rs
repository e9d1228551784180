//! Post handlers.
//!
//! Reads are public; mutations require a JWT and the author is taken from
//! the token, never from the request body.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::domain::PostResponse;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Post creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    /// Post body
    #[validate(length(min = 1, message = "Post content cannot be empty"))]
    #[schema(example = "hello world")]
    pub content: String,
}

/// Post update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    /// New post body
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    #[schema(example = "edited post")]
    pub content: String,
}

/// Creation confirmation with the store-assigned id
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePostResponse {
    #[schema(example = "Post created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub post_id: i64,
}

/// Create post routes; mutations sit behind the auth middleware
pub fn post_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_post))
        .route("/:id", put(update_post).delete(delete_post))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_posts))
        .route("/:id", get(get_post))
        .merge(protected)
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    security(("bearer_auth" = [])),
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created successfully", body = CreatePostResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<CreatePostResponse>)> {
    let post = state
        .post_service
        .create_post(current_user.id, payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created successfully".to_string(),
            post_id: post.id,
        }),
    ))
}

/// List all posts, newest first
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<PostResponse>)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.post_service.get_all_posts().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Get post by ID
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post", body = PostResponse),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PostResponse>> {
    let post = state.post_service.get_post(id).await?;
    Ok(Json(PostResponse::from(post)))
}

/// Update post content (author only)
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the author"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn update_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdatePostRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .post_service
        .update_post(id, current_user.id, payload.content)
        .await?;

    Ok(Json(MessageResponse::new("Post updated successfully")))
}

/// Delete post (author only)
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the author"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.post_service.delete_post(id, current_user.id).await?;

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
