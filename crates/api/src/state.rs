use std::sync::Arc;

use cinematch_catalog::CatalogClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinematch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream movie catalog client.
    pub catalog: Arc<CatalogClient>,
}
