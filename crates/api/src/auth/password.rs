//! Argon2id credential hashing.
//!
//! Hashes use the Argon2id variant with a random salt from [`OsRng`] and are
//! stored in PHC string format, so the parameters and salt travel with the
//! hash. Verification reads the parameters back from the stored hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

pub use argon2::password_hash::Error as HashError;

/// Salt and output segments of [`Argon2Hasher::placeholder_hash`].
const PLACEHOLDER_SALT: &str = "EMJzvHt0opHFcbpaAATNeQ";
const PLACEHOLDER_OUTPUT: &str = "eGxLrpoXXYuS4ugsOU1enFLeIopMGYcoD8FUIzjfEf8";

/// One-way credential hashing, injected into the user services.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password, returning a self-describing hash string.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on mismatch; `Err` only when `hash` is malformed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;

    /// A well-formed hash at this hasher's cost that no password is expected
    /// to match. Login verifies against it when the email is unknown, so a
    /// miss takes as long as a wrong password.
    fn placeholder_hash(&self) -> String;
}

/// Production [`CredentialHasher`].
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    /// Hasher with explicit cost parameters.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed_hash = PasswordHash::new(hash)?;
        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn placeholder_hash(&self) -> String {
        format!(
            "$argon2id$v=19$m={},t={},p={}${PLACEHOLDER_SALT}${PLACEHOLDER_OUTPUT}",
            self.params.m_cost(),
            self.params.t_cost(),
            self.params.p_cost(),
        )
    }
}
