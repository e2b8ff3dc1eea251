//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use photogram_core::error::CoreError;
use photogram_core::types::DbId;

use crate::auth::jwt::{extract_bearer, verify_token};
use crate::error::AppError;
use crate::state::AppState;

/// Acting user extracted from the `Authorization: Bearer <token>` header.
///
/// A missing header or token is rejected as [`CoreError::MissingToken`];
/// a bad signature or an expired token as [`CoreError::InvalidToken`] /
/// [`CoreError::TokenExpired`].
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let user_id = extract_bearer(header)
            .and_then(|token| verify_token(token, &state.config.jwt))
            .map_err(|err| {
                tracing::debug!(error = %err, "Rejected bearer token");
                AppError::Core(CoreError::from(err))
            })?;

        Ok(AuthUser { user_id })
    }
}
