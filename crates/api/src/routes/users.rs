use axum::routing::{post, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /register    -> register
/// POST   /login       -> login
/// PUT    /            -> update (own profile)
/// DELETE /            -> delete (own account)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/", put(users::update).delete(users::delete))
}
