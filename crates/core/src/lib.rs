//! Domain building blocks shared by the storage and HTTP crates.

pub mod error;
pub mod ownership;
pub mod types;
pub mod validation;
