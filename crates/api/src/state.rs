use std::sync::Arc;

use photogram_db::store::Store;

use crate::auth::password::CredentialHasher;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence port, constructed once at startup.
    pub store: Arc<dyn Store>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Password hashing capability.
    pub hasher: Arc<dyn CredentialHasher>,
}
