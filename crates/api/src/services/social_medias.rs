use photogram_core::types::DbId;
use photogram_core::validation::validate_input;
use photogram_db::models::social_media::{
    NewSocialMedia, SocialMedia, SocialMediaInput, SocialMediaWithOwner,
};
use photogram_db::store::{Store, Table};

use crate::error::AppResult;
use crate::services::cache::LookupCache;
use crate::services::owned::{delete_owned, owner_summary, update_owned};

pub async fn create(
    store: &dyn Store,
    actor: DbId,
    input: SocialMediaInput,
) -> AppResult<SocialMedia> {
    validate_input(&input)?;

    let new = NewSocialMedia {
        name: input.name,
        social_media_url: input.social_media_url,
        user_id: actor,
    };
    Ok(Table::<SocialMedia>::create(store, &new).await?)
}

pub async fn list(store: &dyn Store) -> AppResult<Vec<SocialMediaWithOwner>> {
    let items = Table::<SocialMedia>::find_all(store).await?;

    let mut owners = LookupCache::new();
    let mut out = Vec::with_capacity(items.len());
    for social_media in items {
        let user = owner_summary(store, &mut owners, social_media.user_id).await?;
        out.push(SocialMediaWithOwner { social_media, user });
    }
    Ok(out)
}

/// Both `name` and `social_media_url` are overwritten.
pub async fn update(
    store: &dyn Store,
    id: DbId,
    actor: DbId,
    patch: SocialMediaInput,
) -> AppResult<SocialMedia> {
    validate_input(&patch)?;

    update_owned(store, id, actor, move |item: &mut SocialMedia| {
        item.name = patch.name;
        item.social_media_url = patch.social_media_url;
    })
    .await
}

pub async fn delete(store: &dyn Store, id: DbId, actor: DbId) -> AppResult<()> {
    delete_owned::<SocialMedia, _>(store, id, actor).await
}
