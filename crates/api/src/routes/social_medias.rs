use axum::routing::{get, put};
use axum::Router;

use crate::handlers::social_medias;
use crate::state::AppState;

/// Routes mounted at `/socialmedias`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(social_medias::list).post(social_medias::create))
        .route("/{id}", put(social_medias::update).delete(social_medias::delete))
}
