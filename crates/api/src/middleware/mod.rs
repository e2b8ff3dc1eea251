//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the acting user, from a JWT bearer token.
//! - [`extract::JsonBody`] / [`extract::IdPath`] -- body and path extraction
//!   whose rejections use the JSON error envelope.

pub mod auth;
pub mod extract;
