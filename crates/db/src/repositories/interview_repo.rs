//! Repository for the `interviews` table.

use placement_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::interview::{CreateInterview, Interview, InterviewWithCompany, UpdateInterview};

const COLUMNS: &str = "id, user_id, company_id, interview_date, interview_type, location, notes, \
                       created_at, updated_at";

/// Columns for the company-joined view; `i` is `interviews`, `c` is `companies`.
const JOINED_COLUMNS: &str = "i.id, i.user_id, i.company_id, i.interview_date, i.interview_type, \
                              i.location, i.notes, i.created_at, i.updated_at, \
                              c.name AS company_name";

/// Provides owner-scoped CRUD operations for interviews.
pub struct InterviewRepo;

impl InterviewRepo {
    /// Schedule a new interview owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateInterview,
    ) -> Result<Interview, sqlx::Error> {
        let query = format!(
            "INSERT INTO interviews (user_id, company_id, interview_date, interview_type, location, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(user_id)
            .bind(input.company_id)
            .bind(input.interview_date)
            .bind(input.interview_type.as_str())
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find one of the owner's interviews, with the company name joined.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<InterviewWithCompany>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM interviews i
             LEFT JOIN companies c ON c.id = i.company_id
             WHERE i.id = $1 AND i.user_id = $2"
        );
        sqlx::query_as::<_, InterviewWithCompany>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's interviews in chronological order (soonest first).
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<InterviewWithCompany>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM interviews i
             LEFT JOIN companies c ON c.id = i.company_id
             WHERE i.user_id = $1
             ORDER BY i.interview_date ASC, i.id ASC"
        );
        sqlx::query_as::<_, InterviewWithCompany>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an interview. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateInterview,
    ) -> Result<Option<Interview>, sqlx::Error> {
        let query = format!(
            "UPDATE interviews SET
                company_id = COALESCE($3, company_id),
                interview_date = COALESCE($4, interview_date),
                interview_type = COALESCE($5, interview_type),
                location = COALESCE($6, location),
                notes = COALESCE($7, notes)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.company_id)
            .bind(input.interview_date)
            .bind(input.interview_type.map(|t| t.as_str()))
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an interview and its student assignments.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the owner's interviews dated at or after `now`.
    pub async fn count_upcoming(
        pool: &PgPool,
        user_id: DbId,
        now: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM interviews WHERE user_id = $1 AND interview_date >= $2",
        )
        .bind(user_id)
        .bind(now)
        .fetch_one(pool)
        .await
    }
}
