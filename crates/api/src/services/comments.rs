use photogram_core::error::CoreError;
use photogram_core::types::DbId;
use photogram_core::validation::validate_input;
use photogram_db::models::comment::{
    Comment, CommentWithContext, CreateComment, NewComment, UpdateComment,
};
use photogram_db::models::photo::Photo;
use photogram_db::store::{Store, Table};

use crate::error::AppResult;
use crate::services::cache::LookupCache;
use crate::services::owned::{delete_owned, owner_summary, update_owned};

/// The target photo must exist; a missing one is a validation failure
/// rather than a 404 because the id came from the request body.
pub async fn create(store: &dyn Store, actor: DbId, input: CreateComment) -> AppResult<Comment> {
    validate_input(&input)?;

    if Table::<Photo>::find_by_id(store, input.photo_id)
        .await?
        .is_none()
    {
        return Err(CoreError::Validation(format!(
            "Photo with id {} not found",
            input.photo_id
        ))
        .into());
    }

    let new = NewComment {
        message: input.message,
        photo_id: input.photo_id,
        user_id: actor,
    };
    Ok(Table::<Comment>::create(store, &new).await?)
}

/// Every comment with its owner summary and target photo.
pub async fn list(store: &dyn Store) -> AppResult<Vec<CommentWithContext>> {
    let comments = Table::<Comment>::find_all(store).await?;

    let mut owners = LookupCache::new();
    let mut photos: LookupCache<Photo> = LookupCache::new();
    let mut out = Vec::with_capacity(comments.len());
    for comment in comments {
        let user = owner_summary(store, &mut owners, comment.user_id).await?;
        let photo = match comment.photo_id {
            Some(photo_id) => {
                photos
                    .get_or_load(photo_id, |id| Table::<Photo>::find_by_id(store, id))
                    .await?
            }
            None => None,
        };
        out.push(CommentWithContext {
            comment,
            user,
            photo,
        });
    }
    Ok(out)
}

pub async fn update(
    store: &dyn Store,
    id: DbId,
    actor: DbId,
    patch: UpdateComment,
) -> AppResult<Comment> {
    validate_input(&patch)?;

    update_owned(store, id, actor, move |comment: &mut Comment| {
        comment.message = patch.message;
    })
    .await
}

pub async fn delete(store: &dyn Store, id: DbId, actor: DbId) -> AppResult<()> {
    delete_owned::<Comment, _>(store, id, actor).await
}
