//! Handlers for the `/socialmedias` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use photogram_db::models::social_media::{SocialMedia, SocialMediaInput, SocialMediaWithOwner};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{IdPath, JsonBody};
use crate::response::{DataResponse, MessageResponse};
use crate::services::social_medias;
use crate::state::AppState;

/// POST /api/v1/socialmedias
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<SocialMediaInput>,
) -> AppResult<(StatusCode, Json<DataResponse<SocialMedia>>)> {
    let item = social_medias::create(state.store.as_ref(), auth.user_id, input).await?;
    tracing::info!(
        social_media_id = item.id,
        user_id = auth.user_id,
        "Social media created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/socialmedias
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<SocialMediaWithOwner>>>> {
    let items = social_medias::list(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/socialmedias/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<SocialMediaInput>,
) -> AppResult<Json<DataResponse<SocialMedia>>> {
    let item = social_medias::update(state.store.as_ref(), id, auth.user_id, input).await?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/socialmedias/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    social_medias::delete(state.store.as_ref(), id, auth.user_id).await?;
    tracing::info!(social_media_id = id, user_id = auth.user_id, "Social media deleted");
    Ok(Json(MessageResponse::new(
        "Your social media has been successfully deleted",
    )))
}
