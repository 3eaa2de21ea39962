//! Route definitions for the `/interviews` resource.
//!
//! Also nests the student assignment routes under `/interviews/{id}/students`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::interview;
use crate::state::AppState;

/// Routes mounted at `/interviews`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{id}/students                     -> list_students
/// POST   /{id}/students                     -> add_student
/// PUT    /{id}/students                     -> sync_students
/// DELETE /{id}/students/{assignment_id}     -> remove_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(interview::list).post(interview::create))
        .route(
            "/{id}",
            get(interview::get_by_id)
                .put(interview::update)
                .delete(interview::delete),
        )
        .route(
            "/{id}/students",
            get(interview::list_students)
                .post(interview::add_student)
                .put(interview::sync_students),
        )
        .route(
            "/{id}/students/{assignment_id}",
            delete(interview::remove_student),
        )
}
