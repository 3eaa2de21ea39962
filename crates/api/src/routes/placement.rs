//! Route definitions for the `/placements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::placement;
use crate::state::AppState;

/// Routes mounted at `/placements`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(placement::list).post(placement::create))
        .route(
            "/{id}",
            get(placement::get_by_id).put(placement::update).delete(placement::delete),
        )
}
