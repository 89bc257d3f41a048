//! Route definitions for the `/tickets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tickets;
use crate::state::AppState;

/// Routes mounted at `/tickets`. All require auth.
///
/// ```text
/// GET    /       -> list (with technician/client resolved)
/// POST   /       -> create
/// GET    /{id}   -> get (with technician/client resolved)
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tickets::list).post(tickets::create))
        .route(
            "/{id}",
            get(tickets::get).put(tickets::update).delete(tickets::delete),
        )
}
