//! Repository for the `social_medias` table.

use photogram_core::types::DbId;
use sqlx::PgPool;

use crate::models::social_media::{NewSocialMedia, SocialMedia};

const COLUMNS: &str = "id, name, social_media_url, user_id, created_at, updated_at";

pub struct SocialMediaRepo;

impl SocialMediaRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewSocialMedia,
    ) -> Result<SocialMedia, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_medias (name, social_media_url, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialMedia>(&query)
            .bind(&input.name)
            .bind(&input.social_media_url)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SocialMedia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_medias WHERE id = $1");
        sqlx::query_as::<_, SocialMedia>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<SocialMedia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_medias ORDER BY id");
        sqlx::query_as::<_, SocialMedia>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn save(pool: &PgPool, item: &SocialMedia) -> Result<SocialMedia, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_medias (id, name, social_media_url, user_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                social_media_url = EXCLUDED.social_media_url,
                updated_at = EXCLUDED.updated_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialMedia>(&query)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.social_media_url)
            .bind(item.user_id)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_medias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
