//! Handler for the `/stats` aggregate summary.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use placement_core::stats::{summarize, EntityCounts, PlacementStats};
use placement_db::repositories::{CompanyRepo, InterviewRepo, PlacementRepo, StudentRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// The four reads run concurrently; any failure fails the whole request.
/// Only `Confirmed` placements contribute.
pub async fn get_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<PlacementStats>> {
    let pool = &state.pool;
    let user_id = auth.user_id;

    let (students, companies, placements, upcoming_interviews) = tokio::try_join!(
        StudentRepo::count(pool, user_id),
        CompanyRepo::count(pool, user_id),
        PlacementRepo::list_confirmed(pool, user_id),
        InterviewRepo::count_upcoming(pool, user_id, Utc::now()),
    )?;

    let counts = EntityCounts {
        students,
        companies,
        upcoming_interviews,
    };
    Ok(Json(summarize(counts, &placements)))
}
