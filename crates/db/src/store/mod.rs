//! Persistence port.
//!
//! The API layer talks to storage only through [`Store`], constructed once at
//! startup and shared behind an `Arc`. [`PgStore`] is the PostgreSQL
//! implementation; [`MemoryStore`] keeps everything in process and emulates
//! the same constraints (unique usernames/emails, foreign keys, set-null on
//! user delete and on photo delete).

use async_trait::async_trait;
use photogram_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, NewComment};
use crate::models::photo::{NewPhoto, Photo};
use crate::models::social_media::{NewSocialMedia, SocialMedia};
use crate::models::user::{NewUser, OwnerSummary, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Storage failures the callers can tell apart.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Referenced row does not exist: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return StoreError::UniqueViolation { constraint },
                Some(FOREIGN_KEY_VIOLATION) => {
                    return StoreError::ForeignKeyViolation { constraint }
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted entity kind.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in not-found messages.
    const ENTITY: &'static str;

    /// Insert payload for [`Table::create`].
    type New: Send + Sync;

    fn id(&self) -> DbId;

    /// Stamp `updated_at` before a [`Table::save`].
    fn touch(&mut self, at: Timestamp);
}

/// CRUD operations for one entity kind.
#[async_trait]
pub trait Table<R: Record>: Send + Sync {
    /// Insert a new row; the store assigns `id` and both timestamps.
    async fn create(&self, input: &R::New) -> StoreResult<R>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<R>>;

    /// All rows ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<R>>;

    /// Upsert by id. For an existing row, `user_id` and `created_at` are
    /// never rewritten.
    async fn save(&self, record: &R) -> StoreResult<R>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;
}

/// User lookups outside plain CRUD.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// `{id, username, email}` projection of a user.
    async fn find_owner_summary(&self, id: DbId) -> StoreResult<Option<OwnerSummary>>;
}

/// The full persistence port.
#[async_trait]
pub trait Store:
    Table<User> + Table<Photo> + Table<Comment> + Table<SocialMedia> + UserDirectory
{
    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}

impl Record for User {
    const ENTITY: &'static str = "User";
    type New = NewUser;

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

impl Record for Photo {
    const ENTITY: &'static str = "Photo";
    type New = NewPhoto;

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

impl Record for Comment {
    const ENTITY: &'static str = "Comment";
    type New = NewComment;

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

impl Record for SocialMedia {
    const ENTITY: &'static str = "SocialMedia";
    type New = NewSocialMedia;

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}
