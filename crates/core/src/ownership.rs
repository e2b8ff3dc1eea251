//! Ownership capability and the single ownership check.
//!
//! Every user-owned resource exposes its owner through [`Owned`]; mutation
//! paths call [`ensure_owner`] after the resource has been loaded, so a
//! resource that exists but belongs to someone else is always reported as
//! [`CoreError::Forbidden`] and never as not-found.

use crate::error::CoreError;
use crate::types::DbId;

/// Message returned when the caller does not own the target resource.
pub const NOT_OWNER_MESSAGE: &str = "This resource is not yours.";

/// A resource bound to exactly one owning user at creation.
///
/// `None` means the owner was deleted and the reference was cleared.
pub trait Owned {
    fn owner_id(&self) -> Option<DbId>;
}

/// Reject the action unless `actor` is the resource's owner.
///
/// A resource whose owner reference was cleared belongs to nobody and
/// cannot be mutated.
pub fn ensure_owner<T: Owned + ?Sized>(resource: &T, actor: DbId) -> Result<(), CoreError> {
    match resource.owner_id() {
        Some(owner) if owner == actor => Ok(()),
        _ => Err(CoreError::Forbidden(NOT_OWNER_MESSAGE.into())),
    }
}
