pub mod auth;
pub mod clients;
pub mod health;
pub mod technicians;
pub mod tickets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/confirm/{token}     confirm email (public)
/// /auth/login               login (public)
/// /auth/forgot              request password reset (public)
/// /auth/reset               consume reset token (public)
/// /auth/me                  current account (requires auth)
///
/// /clients                  list, create
/// /clients/{id}             get, update, delete
///
/// /technicians              list, create
/// /technicians/{id}         get, update, delete
///
/// /tickets                  list, create
/// /tickets/{id}             get, update, delete
/// ```
///
/// Everything outside `/auth` requires a Bearer token; the extractor on
/// each handler enforces it.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/clients", clients::router())
        .nest("/technicians", technicians::router())
        .nest("/tickets", tickets::router())
}
