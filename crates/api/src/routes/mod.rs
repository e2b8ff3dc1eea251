pub mod comments;
pub mod health;
pub mod photos;
pub mod social_medias;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users/register                  register (public)
/// /users/login                     login (public)
/// /users                           update, delete own account
///
/// /photos                          list, create
/// /photos/{id}                     update, delete
///
/// /comments                        list, create
/// /comments/{id}                   update, delete
///
/// /socialmedias                    list, create
/// /socialmedias/{id}               update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/photos", photos::router())
        .nest("/comments", comments::router())
        .nest("/socialmedias", social_medias::router())
}
