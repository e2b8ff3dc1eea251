//! Business operations behind the HTTP handlers.
//!
//! Services take the persistence port as `&dyn Store`, validate input, apply
//! the ownership rule and return [`crate::error::AppResult`]. Handlers only
//! extract, call and wrap.

pub mod cache;
pub mod comments;
pub mod owned;
pub mod photos;
pub mod social_medias;
pub mod users;
