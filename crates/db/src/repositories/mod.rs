//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod photo_repo;
pub mod social_media_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use photo_repo::PhotoRepo;
pub use social_media_repo::SocialMediaRepo;
pub use user_repo::UserRepo;
