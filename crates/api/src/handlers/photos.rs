//! Handlers for the `/photos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use photogram_db::models::photo::{CreatePhoto, Photo, PhotoWithOwner, UpdatePhoto};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{IdPath, JsonBody};
use crate::response::{DataResponse, MessageResponse};
use crate::services::photos;
use crate::state::AppState;

/// POST /api/v1/photos
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<CreatePhoto>,
) -> AppResult<(StatusCode, Json<DataResponse<Photo>>)> {
    let photo = photos::create(state.store.as_ref(), auth.user_id, input).await?;
    tracing::info!(photo_id = photo.id, user_id = auth.user_id, "Photo created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// GET /api/v1/photos
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<PhotoWithOwner>>>> {
    let photos = photos::list(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// PUT /api/v1/photos/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdatePhoto>,
) -> AppResult<Json<DataResponse<Photo>>> {
    let photo = photos::update(state.store.as_ref(), id, auth.user_id, input).await?;
    tracing::info!(photo_id = id, user_id = auth.user_id, "Photo updated");
    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /api/v1/photos/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    photos::delete(state.store.as_ref(), id, auth.user_id).await?;
    tracing::info!(photo_id = id, user_id = auth.user_id, "Photo deleted");
    Ok(Json(MessageResponse::new(
        "Your photo has been successfully deleted",
    )))
}
