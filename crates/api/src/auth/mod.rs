//! Authentication primitives.
//!
//! - [`password`] -- Argon2id credential hashing behind the [`password::CredentialHasher`] trait.
//! - [`jwt`] -- identity token issuance, verification and bearer extraction.

pub mod jwt;
pub mod password;
