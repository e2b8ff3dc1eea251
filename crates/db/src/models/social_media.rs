//! Social media link model and DTOs.

use photogram_core::ownership::Owned;
use photogram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::OwnerSummary;

/// A row from the `social_medias` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SocialMedia {
    pub id: DbId,
    pub name: String,
    pub social_media_url: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for SocialMedia {
    fn owner_id(&self) -> Option<DbId> {
        self.user_id
    }
}

/// Insert payload for the `social_medias` table.
#[derive(Debug, Clone)]
pub struct NewSocialMedia {
    pub name: String,
    pub social_media_url: String,
    pub user_id: DbId,
}

/// Request body for both create and update; updates overwrite both fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SocialMediaInput {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 8192,
        message = "name is required and at most 8192 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 8192,
        message = "social_media_url is required and at most 8192 characters"
    ))]
    pub social_media_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialMediaWithOwner {
    #[serde(flatten)]
    pub social_media: SocialMedia,
    pub user: Option<OwnerSummary>,
}
