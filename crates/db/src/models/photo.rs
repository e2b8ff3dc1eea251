//! Photo entity model and DTOs.

use photogram_core::ownership::Owned;
use photogram_core::types::{DbId, Timestamp};
use photogram_core::validation::blank_or_url;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::OwnerSummary;

/// A row from the `photos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    /// Cleared to `NULL` when the owning user is deleted.
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Photo {
    fn owner_id(&self) -> Option<DbId> {
        self.user_id
    }
}

/// Insert payload for the `photos` table.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: DbId,
}

/// Request body for creating a photo. Caption is optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePhoto {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "photo_url is required"),
        url(message = "photo_url must be a valid URL")
    )]
    pub photo_url: String,
}

/// Request body for updating a photo.
///
/// Empty `title` / `photo_url` keep the stored values; `caption` is always
/// written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePhoto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    #[validate(custom(function = "blank_or_url"))]
    pub photo_url: String,
}

/// List entry: the photo plus its owner's public summary.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoWithOwner {
    #[serde(flatten)]
    pub photo: Photo,
    pub user: Option<OwnerSummary>,
}
