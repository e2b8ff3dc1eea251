//! Handlers for the `/comments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use photogram_db::models::comment::{Comment, CommentWithContext, CreateComment, UpdateComment};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{IdPath, JsonBody};
use crate::response::{DataResponse, MessageResponse};
use crate::services::comments;
use crate::state::AppState;

/// POST /api/v1/comments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let comment = comments::create(state.store.as_ref(), auth.user_id, input).await?;
    tracing::info!(
        comment_id = comment.id,
        photo_id = comment.photo_id,
        user_id = auth.user_id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /api/v1/comments
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CommentWithContext>>>> {
    let comments = comments::list(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// PUT /api/v1/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateComment>,
) -> AppResult<Json<DataResponse<Comment>>> {
    let comment = comments::update(state.store.as_ref(), id, auth.user_id, input).await?;
    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    comments::delete(state.store.as_ref(), id, auth.user_id).await?;
    tracing::info!(comment_id = id, user_id = auth.user_id, "Comment deleted");
    Ok(Json(MessageResponse::new(
        "Your comment has been successfully deleted",
    )))
}
