use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::documents::formatter::ProfileFormatter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one pool built at startup; closed on shutdown.
    pub db: PgPool,
    /// Pluggable profile formatter. Default: `LlmClient`.
    pub formatter: Arc<dyn ProfileFormatter>,
    pub config: Config,
}
