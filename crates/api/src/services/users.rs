//! Registration, login and self-service profile operations.

use chrono::Utc;
use photogram_core::error::CoreError;
use photogram_core::types::DbId;
use photogram_core::validation::validate_input;
use photogram_db::models::user::{
    LoginUser, NewUser, RegisterUser, UpdateUser, User, UserProfile,
};
use photogram_db::store::{Store, StoreError, Table};

use crate::auth::jwt::{issue_token, JwtConfig};
use crate::auth::password::CredentialHasher;
use crate::error::{AppError, AppResult};

/// Returned (with status 209) when registration collides with an existing user.
pub const DUPLICATE_REGISTRATION_MESSAGE: &str =
    "The email or username is already registered. If it is yours, do login instead.";

/// Returned (with status 200) when a profile update collides with another user.
pub const DUPLICATE_UPDATE_MESSAGE: &str = "The email or username is already registered.";

/// Turn a unique violation into [`CoreError::DuplicateIdentity`].
fn duplicate_as(message: &'static str) -> impl Fn(StoreError) -> AppError {
    move |err| match err {
        StoreError::UniqueViolation { .. } => {
            CoreError::DuplicateIdentity(message.to_string()).into()
        }
        other => other.into(),
    }
}

/// Create a user with a hashed password.
pub async fn register(
    store: &dyn Store,
    hasher: &dyn CredentialHasher,
    input: RegisterUser,
) -> AppResult<UserProfile> {
    validate_input(&input)?;

    let password_hash = hasher
        .hash(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let new = NewUser {
        username: input.username,
        email: input.email,
        password_hash,
        age: input.age,
    };
    let user = Table::<User>::create(store, &new)
        .await
        .map_err(duplicate_as(DUPLICATE_REGISTRATION_MESSAGE))?;

    Ok(UserProfile::from(&user))
}

/// Check credentials and issue a token. Unknown email and wrong password
/// are indistinguishable to the caller.
pub async fn authenticate(
    store: &dyn Store,
    hasher: &dyn CredentialHasher,
    jwt: &JwtConfig,
    input: LoginUser,
) -> AppResult<String> {
    validate_input(&input)?;

    let Some(user) = store.find_user_by_email(&input.email).await? else {
        // Pay for one verification anyway; the outcome is irrelevant.
        let _ = hasher.verify(&input.password, &hasher.placeholder_hash());
        return Err(CoreError::InvalidCredentials.into());
    };

    let matches = hasher
        .verify(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !matches {
        return Err(CoreError::InvalidCredentials.into());
    }

    issue_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))
}

/// Partial update of the caller's own username / email; empty fields keep
/// the stored values.
pub async fn update_profile(
    store: &dyn Store,
    actor: DbId,
    patch: UpdateUser,
) -> AppResult<UserProfile> {
    validate_input(&patch)?;

    let mut user = Table::<User>::find_by_id(store, actor)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: actor,
        })?;

    if !patch.username.is_empty() {
        user.username = patch.username;
    }
    if !patch.email.is_empty() {
        user.email = patch.email;
    }
    user.updated_at = Utc::now();

    let saved = Table::<User>::save(store, &user)
        .await
        .map_err(duplicate_as(DUPLICATE_UPDATE_MESSAGE))?;
    Ok(UserProfile::from(&saved))
}

/// Delete the caller's account. Their photos, comments and social media
/// links stay, with the owner cleared.
pub async fn delete_self(store: &dyn Store, actor: DbId) -> AppResult<()> {
    if !Table::<User>::delete(store, actor).await? {
        return Err(CoreError::NotFound {
            entity: "User",
            id: actor,
        }
        .into());
    }
    Ok(())
}
