use std::sync::Arc;

use revassign_db::service::ReviewService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service shares its pool and randomness source.
#[derive(Clone)]
pub struct AppState {
    /// Transaction coordinator for every domain operation.
    pub reviews: ReviewService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
