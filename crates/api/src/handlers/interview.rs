//! Handlers for the `/interviews` resource and its student assignments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_core::types::DbId;
use placement_db::models::interview::{
    AddInterviewStudent, CreateInterview, Interview, InterviewStudent, InterviewStudentWithName,
    InterviewWithCompany, SyncInterviewStudents, UpdateInterview,
};
use placement_db::repositories::{InterviewRepo, InterviewStudentRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/interviews
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateInterview>,
) -> AppResult<(StatusCode, Json<Interview>)> {
    let interview = InterviewRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

/// GET /api/v1/interviews
///
/// Chronological, with each interview's company name.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InterviewWithCompany>>> {
    let interviews = InterviewRepo::list(&state.pool, auth.user_id).await?;
    Ok(Json(interviews))
}

/// GET /api/v1/interviews/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InterviewWithCompany>> {
    let interview = find_owned(&state, auth.user_id, id).await?;
    Ok(Json(interview))
}

/// PUT /api/v1/interviews/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateInterview>,
) -> AppResult<Json<Interview>> {
    let interview = InterviewRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(interview_not_found(id))?;
    Ok(Json(interview))
}

/// DELETE /api/v1/interviews/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if InterviewRepo::delete(&state.pool, auth.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(interview_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Student assignments
// ---------------------------------------------------------------------------

/// GET /api/v1/interviews/{id}/students
pub async fn list_students(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<InterviewStudentWithName>>> {
    find_owned(&state, auth.user_id, id).await?;
    let assignments = InterviewStudentRepo::list_for_interview(&state.pool, auth.user_id, id).await?;
    Ok(Json(assignments))
}

/// POST /api/v1/interviews/{id}/students
///
/// Both the interview and the student must belong to the caller. Assigning
/// the same student twice is a 400.
pub async fn add_student(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<AddInterviewStudent>,
) -> AppResult<(StatusCode, Json<InterviewStudent>)> {
    find_owned(&state, auth.user_id, id).await?;
    StudentRepo::find_by_id(&state.pool, auth.user_id, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;

    let assignment = InterviewStudentRepo::add(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::BadRequest("Student already added to this interview".into()))?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// PUT /api/v1/interviews/{id}/students
///
/// Replace the assigned set with `student_ids`, returning the new list.
pub async fn sync_students(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<SyncInterviewStudents>,
) -> AppResult<Json<Vec<InterviewStudentWithName>>> {
    find_owned(&state, auth.user_id, id).await?;
    let assignments =
        InterviewStudentRepo::sync(&state.pool, auth.user_id, id, &input.student_ids).await?;
    tracing::debug!(interview_id = id, assigned = assignments.len(), "Interview students synced");
    Ok(Json(assignments))
}

/// DELETE /api/v1/interviews/{id}/students/{assignment_id}
pub async fn remove_student(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((id, assignment_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed =
        InterviewStudentRepo::remove(&state.pool, auth.user_id, id, assignment_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Interview assignment",
            id: assignment_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_owned(
    state: &AppState,
    user_id: DbId,
    id: DbId,
) -> AppResult<InterviewWithCompany> {
    InterviewRepo::find_by_id(&state.pool, user_id, id)
        .await?
        .ok_or(interview_not_found(id))
}

fn interview_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Interview",
        id,
    })
}
