//! Comment handlers.
//!
//! Reads are public; mutations require a JWT, with the author taken from
//! the token.

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
use crate::domain::CommentResponse;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Comment creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    /// Post to comment on
    #[schema(example = 1)]
    pub post_id: i64,
    /// Comment body
    #[validate(length(min = 1, message = "Comment content cannot be empty"))]
    #[schema(example = "nice post")]
    pub content: String,
}

/// Comment update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    /// New comment body
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    #[schema(example = "edited comment")]
    pub content: String,
}

/// Creation confirmation with the store-assigned id
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCommentResponse {
    #[schema(example = "Comment created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub comment_id: i64,
}

/// Create comment routes; mutations sit behind the auth middleware
pub fn comment_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_comment))
        .route("/:id", put(update_comment).delete(delete_comment))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/:id", get(get_comment))
        .route("/post/:post_id", get(get_comments_by_post))
        .merge(protected)
}

/// Create a new comment on a post
#[utoipa::path(
    post,
    path = "/comments",
    tag = "Comments",
    security(("bearer_auth" = [])),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created successfully", body = CreateCommentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User or post not found")
    )
)]
pub async fn create_comment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CreateCommentResponse>)> {
    let comment = state
        .comment_service
        .create_comment(current_user.id, payload.post_id, payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCommentResponse {
            message: "Comment created successfully".to_string(),
            comment_id: comment.id,
        }),
    ))
}

/// Get comment by ID
#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = "Comments",
    params(
        ("id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment", body = CommentResponse),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CommentResponse>> {
    let comment = state.comment_service.get_comment(id).await?;
    Ok(Json(CommentResponse::from(comment)))
}

/// List comments on a post, oldest first
#[utoipa::path(
    get,
    path = "/comments/post/{post_id}",
    tag = "Comments",
    params(
        ("post_id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments on the post, oldest first", body = Vec<CommentResponse>),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_comments_by_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let comments = state.comment_service.get_comments_by_post(post_id).await?;
    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

/// Update comment content (author only)
#[utoipa::path(
    put,
    path = "/comments/{id}",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the author"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn update_comment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .comment_service
        .update_comment(id, current_user.id, payload.content)
        .await?;

    Ok(Json(MessageResponse::new("Comment updated successfully")))
}

/// Delete comment (author only)
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the author"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn delete_comment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state
        .comment_service
        .delete_comment(id, current_user.id)
        .await?;

    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
