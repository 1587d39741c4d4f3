use std::sync::Arc;

use mongodb::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the database handle is reference-counted inside the
/// driver, and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// MongoDB database handle, created once at startup.
    pub db: Database,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
