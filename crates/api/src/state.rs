use std::sync::Arc;

use tourdesk_db::Storage;

use crate::auth::Authenticator;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Entity storage (in-memory or PostgreSQL).
    pub store: Arc<dyn Storage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Issues and verifies admin tokens.
    pub auth: Arc<dyn Authenticator>,
}
