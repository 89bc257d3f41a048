//! Route definitions for the `/technicians` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::technicians;
use crate::state::AppState;

/// Routes mounted at `/technicians`. All require auth.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(technicians::list).post(technicians::create))
        .route(
            "/{id}",
            get(technicians::get)
                .put(technicians::update)
                .delete(technicians::delete),
        )
}
