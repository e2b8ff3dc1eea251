//! Entity rows, insert payloads, request DTOs and list projections.

pub mod comment;
pub mod photo;
pub mod social_media;
pub mod user;
