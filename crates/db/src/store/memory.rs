//! In-process implementation of the persistence port.
//!
//! Mirrors the relational constraints of the PostgreSQL schema so the API
//! behaves the same against either backend: unique usernames and emails,
//! foreign keys on owners and commented photos, `SET NULL` of owners when a
//! user is deleted, and `SET NULL` of a comment's photo when that photo is
//! deleted.
//!
//! All tables sit behind one mutex that is held only for the duration of a
//! single call.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use photogram_core::types::DbId;

use super::{Store, StoreError, StoreResult, Table, UserDirectory};
use crate::models::comment::{Comment, NewComment};
use crate::models::photo::{NewPhoto, Photo};
use crate::models::social_media::{NewSocialMedia, SocialMedia};
use crate::models::user::{NewUser, OwnerSummary, User};

const UQ_USERNAME: &str = "uq_users_username";
const UQ_EMAIL: &str = "uq_users_email";
const FK_PHOTO_OWNER: &str = "photos_user_id_fkey";
const FK_COMMENT_OWNER: &str = "comments_user_id_fkey";
const FK_COMMENT_PHOTO: &str = "comments_photo_id_fkey";
const FK_SOCIAL_MEDIA_OWNER: &str = "social_medias_user_id_fkey";

/// [`Store`] that keeps every table in memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<DbId, User>,
    photos: BTreeMap<DbId, Photo>,
    comments: BTreeMap<DbId, Comment>,
    social_medias: BTreeMap<DbId, SocialMedia>,
    user_seq: DbId,
    photo_seq: DbId,
    comment_seq: DbId,
    social_media_seq: DbId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Advance a sequence and return the new id.
fn next_id(seq: &mut DbId) -> DbId {
    *seq += 1;
    *seq
}

/// Keep a sequence ahead of an explicitly inserted id.
fn bump(seq: &mut DbId, id: DbId) {
    if id > *seq {
        *seq = id;
    }
}

fn fk_violation(constraint: &str) -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: constraint.to_string(),
    }
}

impl Tables {
    /// Enforce `uq_users_username` / `uq_users_email`, ignoring the row `skip`.
    fn check_unique(&self, skip: Option<DbId>, username: &str, email: &str) -> StoreResult<()> {
        for user in self.users.values().filter(|u| Some(u.id) != skip) {
            let constraint = if user.username == username {
                UQ_USERNAME
            } else if user.email == email {
                UQ_EMAIL
            } else {
                continue;
            };
            return Err(StoreError::UniqueViolation {
                constraint: constraint.to_string(),
            });
        }
        Ok(())
    }

    fn check_user(&self, user_id: Option<DbId>, constraint: &str) -> StoreResult<()> {
        match user_id {
            Some(id) if !self.users.contains_key(&id) => Err(fk_violation(constraint)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Table<User> for MemoryStore {
    async fn create(&self, input: &NewUser) -> StoreResult<User> {
        let mut t = self.tables();
        t.check_unique(None, &input.username, &input.email)?;

        let now = Utc::now();
        let user = User {
            id: next_id(&mut t.user_seq),
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            age: input.age,
            created_at: now,
            updated_at: now,
        };
        t.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.tables().users.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables().users.values().cloned().collect())
    }

    async fn save(&self, record: &User) -> StoreResult<User> {
        let mut t = self.tables();
        t.check_unique(Some(record.id), &record.username, &record.email)?;

        let mut saved = record.clone();
        match t.users.get(&record.id).map(|u| u.created_at) {
            Some(created_at) => saved.created_at = created_at,
            None => bump(&mut t.user_seq, record.id),
        }
        t.users.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut t = self.tables();
        if t.users.remove(&id).is_none() {
            return Ok(false);
        }

        // ON DELETE SET NULL for every dependent collection.
        let owner = Some(id);
        t.photos
            .values_mut()
            .filter(|p| p.user_id == owner)
            .for_each(|p| p.user_id = None);
        t.comments
            .values_mut()
            .filter(|c| c.user_id == owner)
            .for_each(|c| c.user_id = None);
        t.social_medias
            .values_mut()
            .filter(|s| s.user_id == owner)
            .for_each(|s| s.user_id = None);
        Ok(true)
    }
}

#[async_trait]
impl Table<Photo> for MemoryStore {
    async fn create(&self, input: &NewPhoto) -> StoreResult<Photo> {
        let mut t = self.tables();
        t.check_user(Some(input.user_id), FK_PHOTO_OWNER)?;

        let now = Utc::now();
        let photo = Photo {
            id: next_id(&mut t.photo_seq),
            title: input.title.clone(),
            caption: input.caption.clone(),
            photo_url: input.photo_url.clone(),
            user_id: Some(input.user_id),
            created_at: now,
            updated_at: now,
        };
        t.photos.insert(photo.id, photo.clone());
        Ok(photo)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Photo>> {
        Ok(self.tables().photos.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Photo>> {
        Ok(self.tables().photos.values().cloned().collect())
    }

    async fn save(&self, record: &Photo) -> StoreResult<Photo> {
        let mut t = self.tables();
        let mut saved = record.clone();
        match t.photos.get(&record.id).map(|p| (p.user_id, p.created_at)) {
            Some((user_id, created_at)) => {
                saved.user_id = user_id;
                saved.created_at = created_at;
            }
            None => {
                t.check_user(record.user_id, FK_PHOTO_OWNER)?;
                bump(&mut t.photo_seq, record.id);
            }
        }
        t.photos.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut t = self.tables();
        if t.photos.remove(&id).is_none() {
            return Ok(false);
        }
        // ON DELETE SET NULL for comments on the photo.
        let target = Some(id);
        t.comments
            .values_mut()
            .filter(|c| c.photo_id == target)
            .for_each(|c| c.photo_id = None);
        Ok(true)
    }
}

#[async_trait]
impl Table<Comment> for MemoryStore {
    async fn create(&self, input: &NewComment) -> StoreResult<Comment> {
        let mut t = self.tables();
        t.check_user(Some(input.user_id), FK_COMMENT_OWNER)?;
        if !t.photos.contains_key(&input.photo_id) {
            return Err(fk_violation(FK_COMMENT_PHOTO));
        }

        let now = Utc::now();
        let comment = Comment {
            id: next_id(&mut t.comment_seq),
            message: input.message.clone(),
            photo_id: Some(input.photo_id),
            user_id: Some(input.user_id),
            created_at: now,
            updated_at: now,
        };
        t.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Comment>> {
        Ok(self.tables().comments.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Comment>> {
        Ok(self.tables().comments.values().cloned().collect())
    }

    async fn save(&self, record: &Comment) -> StoreResult<Comment> {
        let mut t = self.tables();
        let mut saved = record.clone();
        match t
            .comments
            .get(&record.id)
            .map(|c| (c.user_id, c.photo_id, c.created_at))
        {
            Some((user_id, photo_id, created_at)) => {
                saved.user_id = user_id;
                saved.photo_id = photo_id;
                saved.created_at = created_at;
            }
            None => {
                t.check_user(record.user_id, FK_COMMENT_OWNER)?;
                if let Some(photo_id) = record.photo_id {
                    if !t.photos.contains_key(&photo_id) {
                        return Err(fk_violation(FK_COMMENT_PHOTO));
                    }
                }
                bump(&mut t.comment_seq, record.id);
            }
        }
        t.comments.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables().comments.remove(&id).is_some())
    }
}

#[async_trait]
impl Table<SocialMedia> for MemoryStore {
    async fn create(&self, input: &NewSocialMedia) -> StoreResult<SocialMedia> {
        let mut t = self.tables();
        t.check_user(Some(input.user_id), FK_SOCIAL_MEDIA_OWNER)?;

        let now = Utc::now();
        let item = SocialMedia {
            id: next_id(&mut t.social_media_seq),
            name: input.name.clone(),
            social_media_url: input.social_media_url.clone(),
            user_id: Some(input.user_id),
            created_at: now,
            updated_at: now,
        };
        t.social_medias.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<SocialMedia>> {
        Ok(self.tables().social_medias.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<SocialMedia>> {
        Ok(self.tables().social_medias.values().cloned().collect())
    }

    async fn save(&self, record: &SocialMedia) -> StoreResult<SocialMedia> {
        let mut t = self.tables();
        let mut saved = record.clone();
        match t
            .social_medias
            .get(&record.id)
            .map(|s| (s.user_id, s.created_at))
        {
            Some((user_id, created_at)) => {
                saved.user_id = user_id;
                saved.created_at = created_at;
            }
            None => {
                t.check_user(record.user_id, FK_SOCIAL_MEDIA_OWNER)?;
                bump(&mut t.social_media_seq, record.id);
            }
        }
        t.social_medias.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables().social_medias.remove(&id).is_some())
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_owner_summary(&self, id: DbId) -> StoreResult<Option<OwnerSummary>> {
        Ok(self.tables().users.get(&id).map(|u| OwnerSummary {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
        }))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
