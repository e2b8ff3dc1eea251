//! Handlers for the `/users` resource (register, login, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use photogram_core::error::CoreError;
use photogram_db::models::user::{LoginUser, RegisterUser, UpdateUser};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::JsonBody;
use crate::response::{DataResponse, MessageResponse};
use crate::services::users;
use crate::state::AppState;

/// Non-standard status used to tell a client it is already registered.
const ALREADY_REGISTERED: u16 = 209;

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Render a duplicate-identity outcome as `{message}` with `status`;
/// every other error goes through the normal error mapping.
fn duplicate_as_message(err: AppError, status: StatusCode) -> AppResult<Response> {
    match err {
        AppError::Core(CoreError::DuplicateIdentity(message)) => {
            Ok((status, Json(MessageResponse { message })).into_response())
        }
        other => Err(other),
    }
}

/// POST /api/v1/users/register
///
/// 201 with the new profile, or 209 with a message when the username or
/// email is taken.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterUser>,
) -> AppResult<Response> {
    match users::register(state.store.as_ref(), state.hasher.as_ref(), input).await {
        Ok(profile) => {
            tracing::info!(user_id = profile.id, "User registered");
            Ok((StatusCode::CREATED, Json(DataResponse { data: profile })).into_response())
        }
        Err(err) => {
            let status =
                StatusCode::from_u16(ALREADY_REGISTERED).unwrap_or(StatusCode::CONFLICT);
            duplicate_as_message(err, status)
        }
    }
}

/// POST /api/v1/users/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginUser>,
) -> AppResult<Json<DataResponse<TokenResponse>>> {
    let token = users::authenticate(
        state.store.as_ref(),
        state.hasher.as_ref(),
        &state.config.jwt,
        input,
    )
    .await?;
    Ok(Json(DataResponse {
        data: TokenResponse { token },
    }))
}

/// PUT /api/v1/users
///
/// A username/email collision is answered with 200 and a message.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<UpdateUser>,
) -> AppResult<Response> {
    match users::update_profile(state.store.as_ref(), auth.user_id, input).await {
        Ok(profile) => Ok(Json(DataResponse { data: profile }).into_response()),
        Err(err) => duplicate_as_message(err, StatusCode::OK),
    }
}

/// DELETE /api/v1/users
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<MessageResponse>> {
    users::delete_self(state.store.as_ref(), auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, "User deleted");
    Ok(Json(MessageResponse::new(
        "Your account has been successfully deleted",
    )))
}
