//! HTTP handlers. Each one extracts, calls a service and wraps the result in
//! the response envelope.

pub mod comments;
pub mod photos;
pub mod social_medias;
pub mod users;
