//! Handlers for the `/placements` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_core::types::DbId;
use placement_core::validation::{validate_if_present, validate_package};
use placement_db::models::placement::{
    CreatePlacement, Placement, PlacementWithNames, UpdatePlacement,
};
use placement_db::repositories::PlacementRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/placements
///
/// Status defaults to `Confirmed`. The referenced student and company are
/// not checked for ownership; a reference to a missing row is a 400.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlacement>,
) -> AppResult<(StatusCode, Json<Placement>)> {
    validate_package(input.package)?;
    let placement = PlacementRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(placement)))
}

/// GET /api/v1/placements
///
/// Newest placement date first, with student and company names.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PlacementWithNames>>> {
    let placements = PlacementRepo::list(&state.pool, auth.user_id).await?;
    Ok(Json(placements))
}

/// GET /api/v1/placements/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlacementWithNames>> {
    let placement = PlacementRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(placement))
}

/// PUT /api/v1/placements/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePlacement>,
) -> AppResult<Json<Placement>> {
    validate_if_present(input.package, validate_package)?;
    let placement = PlacementRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(placement))
}

/// DELETE /api/v1/placements/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlacementRepo::delete(&state.pool, auth.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Placement",
        id,
    })
}
