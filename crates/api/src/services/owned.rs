//! Ownership-checked read/update/delete, written once for every owned kind.
//!
//! The record is always loaded before the ownership check, so an absent id
//! is [`CoreError::NotFound`] for any caller and a present one owned by
//! someone else is [`CoreError::Forbidden`].

use chrono::Utc;
use photogram_core::error::CoreError;
use photogram_core::ownership::{ensure_owner, Owned};
use photogram_core::types::DbId;
use photogram_db::models::user::OwnerSummary;
use photogram_db::store::{Record, Store, StoreResult, Table};

use crate::error::AppResult;
use crate::services::cache::LookupCache;

/// Load `id` and check that `actor` owns it.
pub async fn find_owned<R, S>(store: &S, id: DbId, actor: DbId) -> AppResult<R>
where
    R: Record + Owned,
    S: Table<R> + ?Sized,
{
    let record = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        })?;
    ensure_owner(&record, actor)?;
    Ok(record)
}

/// Load, check ownership, apply `patch`, stamp `updated_at` and save.
pub async fn update_owned<R, S, F>(store: &S, id: DbId, actor: DbId, patch: F) -> AppResult<R>
where
    R: Record + Owned,
    S: Table<R> + ?Sized,
    F: FnOnce(&mut R) + Send,
{
    let mut record: R = find_owned(store, id, actor).await?;
    patch(&mut record);
    record.touch(Utc::now());
    Ok(store.save(&record).await?)
}

/// Load, check ownership and delete.
pub async fn delete_owned<R, S>(store: &S, id: DbId, actor: DbId) -> AppResult<()>
where
    R: Record + Owned,
    S: Table<R> + ?Sized,
{
    let _: R = find_owned(store, id, actor).await?;
    if !store.delete(id).await? {
        // Removed by a concurrent request between the load and the delete.
        return Err(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }
        .into());
    }
    Ok(())
}

/// Public summary of `user_id`'s owner, `None` when the owner was cleared
/// or no longer exists.
pub async fn owner_summary(
    store: &dyn Store,
    cache: &mut LookupCache<OwnerSummary>,
    user_id: Option<DbId>,
) -> StoreResult<Option<OwnerSummary>> {
    match user_id {
        Some(id) => cache.get_or_load(id, |id| store.find_owner_summary(id)).await,
        None => Ok(None),
    }
}
