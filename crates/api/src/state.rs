use std::sync::Arc;

use helpdesk_mailer::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: helpdesk_db::DbPool,
    /// Server configuration (JWT settings, CORS origins, timeouts).
    pub config: Arc<ServerConfig>,
    /// Outbound SMTP mailer. `None` when SMTP is not configured; account
    /// lifecycle handlers then log and skip delivery instead of failing.
    pub mailer: Option<Arc<Mailer>>,
}
