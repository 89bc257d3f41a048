//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register          -> register (public)
/// GET  /confirm/{token}   -> confirm email (public)
/// POST /login             -> login (public)
/// POST /forgot            -> request password reset (public)
/// POST /reset             -> consume reset token (public)
/// GET  /me                -> current account (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/confirm/{token}", get(auth::confirm))
        .route("/login", post(auth::login))
        .route("/forgot", post(auth::forgot))
        .route("/reset", post(auth::reset))
        .route("/me", get(auth::me))
}
