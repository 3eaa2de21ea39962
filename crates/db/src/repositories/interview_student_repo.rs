//! Repository for the `interview_students` association table.
//!
//! The table has no `user_id` of its own; ownership is enforced by joining
//! through `interviews`. Callers verify the interview belongs to the owner
//! before inserting.

use placement_core::status::DEFAULT_ASSIGNMENT_STATUS;
use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::interview::{AddInterviewStudent, InterviewStudent, InterviewStudentWithName};

const COLUMNS: &str = "id, interview_id, student_id, status, created_at, updated_at";

/// Joined view query; `ist` is `interview_students`, `i` is `interviews`.
const LIST_QUERY: &str = "SELECT ist.id, ist.interview_id, ist.student_id, ist.status, \
                                 ist.created_at, ist.updated_at, s.name AS student_name
                          FROM interview_students ist
                          JOIN interviews i ON i.id = ist.interview_id
                          LEFT JOIN students s ON s.id = ist.student_id
                          WHERE ist.interview_id = $1 AND i.user_id = $2
                          ORDER BY ist.id ASC";

/// Provides assignment operations between interviews and students.
pub struct InterviewStudentRepo;

impl InterviewStudentRepo {
    /// List the students assigned to one of the owner's interviews.
    pub async fn list_for_interview(
        pool: &PgPool,
        user_id: DbId,
        interview_id: DbId,
    ) -> Result<Vec<InterviewStudentWithName>, sqlx::Error> {
        sqlx::query_as::<_, InterviewStudentWithName>(LIST_QUERY)
            .bind(interview_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Assign a student to an interview.
    ///
    /// Returns `None` when the pair is already assigned.
    pub async fn add(
        pool: &PgPool,
        interview_id: DbId,
        input: &AddInterviewStudent,
    ) -> Result<Option<InterviewStudent>, sqlx::Error> {
        let query = format!(
            "INSERT INTO interview_students (interview_id, student_id, status)
             VALUES ($1, $2, $3)
             ON CONFLICT (interview_id, student_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InterviewStudent>(&query)
            .bind(interview_id)
            .bind(input.student_id)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_ASSIGNMENT_STATUS))
            .fetch_optional(pool)
            .await
    }

    /// Remove one assignment from one of the owner's interviews.
    /// Returns `true` if a row was removed.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        interview_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM interview_students ist
             USING interviews i
             WHERE ist.id = $1
               AND ist.interview_id = $2
               AND i.id = ist.interview_id
               AND i.user_id = $3",
        )
        .bind(id)
        .bind(interview_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Make `student_ids` the exact set of students assigned to an interview.
    ///
    /// Students no longer listed are unassigned; new ones are added with the
    /// default status; existing assignments keep their status. Ids that are
    /// not the owner's students are ignored. Runs in one transaction and
    /// returns the resulting assignment list.
    pub async fn sync(
        pool: &PgPool,
        user_id: DbId,
        interview_id: DbId,
        student_ids: &[DbId],
    ) -> Result<Vec<InterviewStudentWithName>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM interview_students
             WHERE interview_id = $1 AND student_id <> ALL($2)",
        )
        .bind(interview_id)
        .bind(student_ids)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO interview_students (interview_id, student_id, status)
             SELECT $1, s.id, $4
             FROM students s
             WHERE s.id = ANY($2) AND s.user_id = $3
             ON CONFLICT (interview_id, student_id) DO NOTHING",
        )
        .bind(interview_id)
        .bind(student_ids)
        .bind(user_id)
        .bind(DEFAULT_ASSIGNMENT_STATUS)
        .execute(&mut *tx)
        .await?;

        let rows = sqlx::query_as::<_, InterviewStudentWithName>(LIST_QUERY)
            .bind(interview_id)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rows)
    }
}
