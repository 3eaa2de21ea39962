//! Interview entity, interview/student assignment, and their DTOs.

use placement_core::status::InterviewType;
use placement_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `interviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interview {
    pub id: DbId,
    pub user_id: DbId,
    pub company_id: DbId,
    pub interview_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub interview_type: InterviewType,
    pub location: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An interview joined with its company's display name (list view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterviewWithCompany {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub interview: Interview,
    pub company_name: Option<String>,
}

/// DTO for scheduling a new interview.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInterview {
    pub company_id: DbId,
    pub interview_date: Timestamp,
    pub interview_type: InterviewType,
    #[validate(length(min = 1, message = "is required"))]
    pub location: String,
    pub notes: Option<String>,
}

/// DTO for updating an interview. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInterview {
    pub company_id: Option<DbId>,
    pub interview_date: Option<Timestamp>,
    pub interview_type: Option<InterviewType>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Interview <-> student assignments
// ---------------------------------------------------------------------------

/// A row from the `interview_students` association table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterviewStudent {
    pub id: DbId,
    pub interview_id: DbId,
    pub student_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An assignment joined with the student's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterviewStudentWithName {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub assignment: InterviewStudent,
    pub student_name: Option<String>,
}

/// DTO for assigning one student to an interview.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddInterviewStudent {
    pub student_id: DbId,
    /// Defaults to `"Scheduled"` when omitted.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: Option<String>,
}

/// DTO replacing the full set of students assigned to an interview.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncInterviewStudents {
    pub student_ids: Vec<DbId>,
}
