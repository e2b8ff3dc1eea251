//! Comment entity model and DTOs.

use photogram_core::ownership::Owned;
use photogram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::photo::Photo;
use crate::models::user::OwnerSummary;

/// A row from the `comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub message: String,
    /// Cleared when the target photo is deleted.
    pub photo_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Comment {
    fn owner_id(&self) -> Option<DbId> {
        self.user_id
    }
}

/// Insert payload for the `comments` table.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub message: String,
    pub photo_id: DbId,
    pub user_id: DbId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 8192,
        message = "message is required and at most 8192 characters"
    ))]
    pub message: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "photo_id is required"))]
    pub photo_id: DbId,
}

/// Comment updates always overwrite the message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateComment {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 8192,
        message = "message is required and at most 8192 characters"
    ))]
    pub message: String,
}

/// List entry: the comment, its owner summary and the photo it targets
/// (`None` once that photo is gone).
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithContext {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: Option<OwnerSummary>,
    pub photo: Option<Photo>,
}
