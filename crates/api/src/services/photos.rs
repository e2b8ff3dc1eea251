use photogram_core::types::DbId;
use photogram_core::validation::validate_input;
use photogram_db::models::photo::{CreatePhoto, NewPhoto, Photo, PhotoWithOwner, UpdatePhoto};
use photogram_db::store::{Store, Table};

use crate::error::AppResult;
use crate::services::cache::LookupCache;
use crate::services::owned::{delete_owned, owner_summary, update_owned};

pub async fn create(store: &dyn Store, actor: DbId, input: CreatePhoto) -> AppResult<Photo> {
    validate_input(&input)?;

    let new = NewPhoto {
        title: input.title,
        caption: input.caption,
        photo_url: input.photo_url,
        user_id: actor,
    };
    Ok(Table::<Photo>::create(store, &new).await?)
}

/// Every photo with its owner's public summary.
pub async fn list(store: &dyn Store) -> AppResult<Vec<PhotoWithOwner>> {
    let photos = Table::<Photo>::find_all(store).await?;

    let mut owners = LookupCache::new();
    let mut out = Vec::with_capacity(photos.len());
    for photo in photos {
        let user = owner_summary(store, &mut owners, photo.user_id).await?;
        out.push(PhotoWithOwner { photo, user });
    }
    Ok(out)
}

/// Empty `title` / `photo_url` keep the stored values; `caption` is always
/// overwritten.
pub async fn update(
    store: &dyn Store,
    id: DbId,
    actor: DbId,
    patch: UpdatePhoto,
) -> AppResult<Photo> {
    validate_input(&patch)?;

    update_owned(store, id, actor, move |photo: &mut Photo| {
        if !patch.title.is_empty() {
            photo.title = patch.title;
        }
        if !patch.photo_url.is_empty() {
            photo.photo_url = patch.photo_url;
        }
        photo.caption = patch.caption;
    })
    .await
}

/// Deleting a photo also deletes its comments.
pub async fn delete(store: &dyn Store, id: DbId, actor: DbId) -> AppResult<()> {
    delete_owned::<Photo, _>(store, id, actor).await
}
