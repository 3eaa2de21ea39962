//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_core::types::DbId;
use placement_core::validation::{validate_cgpa, validate_if_present};
use placement_db::models::student::{CreateStudent, Student, UpdateStudent};
use placement_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/students
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    validate_cgpa(input.cgpa)?;
    let student = StudentRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
///
/// Newest first.
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool, auth.user_id).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    validate_if_present(input.cgpa, validate_cgpa)?;
    let student = StudentRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
///
/// Cascades to the student's placements and interview assignments.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StudentRepo::delete(&state.pool, auth.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}
