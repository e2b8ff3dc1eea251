//! PostgreSQL implementation of the persistence port.

use async_trait::async_trait;
use photogram_core::types::DbId;

use super::{Store, StoreResult, Table, UserDirectory};
use crate::models::comment::{Comment, NewComment};
use crate::models::photo::{NewPhoto, Photo};
use crate::models::social_media::{NewSocialMedia, SocialMedia};
use crate::models::user::{NewUser, OwnerSummary, User};
use crate::repositories::{CommentRepo, PhotoRepo, SocialMediaRepo, UserRepo};
use crate::DbPool;

/// [`Store`] backed by a sqlx connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Table<User> for PgStore {
    async fn create(&self, input: &NewUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn save(&self, record: &User) -> StoreResult<User> {
        Ok(UserRepo::save(&self.pool, record).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(UserRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl Table<Photo> for PgStore {
    async fn create(&self, input: &NewPhoto) -> StoreResult<Photo> {
        Ok(PhotoRepo::create(&self.pool, input).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Photo>> {
        Ok(PhotoRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_all(&self) -> StoreResult<Vec<Photo>> {
        Ok(PhotoRepo::list(&self.pool).await?)
    }

    async fn save(&self, record: &Photo) -> StoreResult<Photo> {
        Ok(PhotoRepo::save(&self.pool, record).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(PhotoRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl Table<Comment> for PgStore {
    async fn create(&self, input: &NewComment) -> StoreResult<Comment> {
        Ok(CommentRepo::create(&self.pool, input).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Comment>> {
        Ok(CommentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_all(&self) -> StoreResult<Vec<Comment>> {
        Ok(CommentRepo::list(&self.pool).await?)
    }

    async fn save(&self, record: &Comment) -> StoreResult<Comment> {
        Ok(CommentRepo::save(&self.pool, record).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(CommentRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl Table<SocialMedia> for PgStore {
    async fn create(&self, input: &NewSocialMedia) -> StoreResult<SocialMedia> {
        Ok(SocialMediaRepo::create(&self.pool, input).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<SocialMedia>> {
        Ok(SocialMediaRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_all(&self) -> StoreResult<Vec<SocialMedia>> {
        Ok(SocialMediaRepo::list(&self.pool).await?)
    }

    async fn save(&self, record: &SocialMedia) -> StoreResult<SocialMedia> {
        Ok(SocialMediaRepo::save(&self.pool, record).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(SocialMediaRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl UserDirectory for PgStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn find_owner_summary(&self, id: DbId) -> StoreResult<Option<OwnerSummary>> {
        Ok(UserRepo::find_summary(&self.pool, id).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
