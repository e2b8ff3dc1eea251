//! Repository for the `photos` table.

use photogram_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{NewPhoto, Photo};

const COLUMNS: &str = "id, title, caption, photo_url, user_id, created_at, updated_at";

/// Provides CRUD operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a new photo, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (title, caption, photo_url, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(&input.title)
            .bind(&input.caption)
            .bind(&input.photo_url)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos ORDER BY id");
        sqlx::query_as::<_, Photo>(&query).fetch_all(pool).await
    }

    /// Insert or overwrite a photo by id. The owner and `created_at` of an
    /// existing row are never changed.
    pub async fn save(pool: &PgPool, photo: &Photo) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (id, title, caption, photo_url, user_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                caption = EXCLUDED.caption,
                photo_url = EXCLUDED.photo_url,
                updated_at = EXCLUDED.updated_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(photo.id)
            .bind(&photo.title)
            .bind(&photo.caption)
            .bind(&photo.photo_url)
            .bind(photo.user_id)
            .bind(photo.created_at)
            .bind(photo.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Delete a photo and, through `ON DELETE CASCADE`, its comments.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
