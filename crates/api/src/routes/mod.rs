pub mod auth;
pub mod company;
pub mod health;
pub mod interview;
pub mod placement;
pub mod stats;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                   create account (public)
/// /auth/signin                                   sign in (public)
/// /auth/refresh                                  rotate refresh token (public)
/// /auth/logout                                   revoke sessions (requires auth)
/// /auth/session                                  current user (requires auth)
///
/// /students                                      list, create
/// /students/{id}                                 get, update, delete
///
/// /companies                                     list, create
/// /companies/{id}                                get, update, delete
///
/// /interviews                                    list, create
/// /interviews/{id}                               get, update, delete
/// /interviews/{id}/students                      list, add, sync (GET, POST, PUT)
/// /interviews/{id}/students/{assignment_id}      remove (DELETE)
///
/// /placements                                    list, create
/// /placements/{id}                               get, update, delete
///
/// /stats                                         aggregate summary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/students", student::router())
        .nest("/companies", company::router())
        .nest("/interviews", interview::router())
        .nest("/placements", placement::router())
        .nest("/stats", stats::router())
}
