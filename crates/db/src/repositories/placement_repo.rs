//! Repository for the `placements` table.

use placement_core::stats::ConfirmedPlacement;
use placement_core::status::PlacementStatus;
use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::placement::{
    ConfirmedPlacementRow, CreatePlacement, Placement, PlacementWithNames, UpdatePlacement,
};

const COLUMNS: &str = "id, user_id, student_id, company_id, position, package, placement_date, \
                       status, created_at, updated_at";

/// Columns for the name-joined view; `p` placements, `s` students, `c` companies.
const JOINED_COLUMNS: &str = "p.id, p.user_id, p.student_id, p.company_id, p.position, \
                              p.package, p.placement_date, p.status, p.created_at, \
                              p.updated_at, s.name AS student_name, c.name AS company_name";

/// Provides owner-scoped CRUD operations for placements.
pub struct PlacementRepo;

impl PlacementRepo {
    /// Record a placement owned by `user_id`. Status defaults to `Confirmed`.
    ///
    /// The referenced student and company must exist (foreign keys) but are
    /// not required to belong to the same owner. The joined reads below then
    /// show the other owner's student and company names for such a row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePlacement,
    ) -> Result<Placement, sqlx::Error> {
        let query = format!(
            "INSERT INTO placements (user_id, student_id, company_id, position, package,
                                     placement_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(user_id)
            .bind(input.student_id)
            .bind(input.company_id)
            .bind(&input.position)
            .bind(input.package)
            .bind(input.placement_date)
            .bind(input.status.unwrap_or_default().as_str())
            .fetch_one(pool)
            .await
    }

    /// Find one of the owner's placements, with display names joined.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<PlacementWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM placements p
             LEFT JOIN students s ON s.id = p.student_id
             LEFT JOIN companies c ON c.id = p.company_id
             WHERE p.id = $1 AND p.user_id = $2"
        );
        sqlx::query_as::<_, PlacementWithNames>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's placements, most recently created first.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PlacementWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM placements p
             LEFT JOIN students s ON s.id = p.student_id
             LEFT JOIN companies c ON c.id = p.company_id
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PlacementWithNames>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a placement. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdatePlacement,
    ) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!(
            "UPDATE placements SET
                student_id = COALESCE($3, student_id),
                company_id = COALESCE($4, company_id),
                position = COALESCE($5, position),
                package = COALESCE($6, package),
                placement_date = COALESCE($7, placement_date),
                status = COALESCE($8, status)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.student_id)
            .bind(input.company_id)
            .bind(&input.position)
            .bind(input.package)
            .bind(input.placement_date)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a placement. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placements WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the owner's `Confirmed` placements for aggregation, newest first.
    pub async fn list_confirmed(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ConfirmedPlacement>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ConfirmedPlacementRow>(
            "SELECT p.student_id, s.name AS student_name, c.name AS company_name,
                    p.position, p.package, p.placement_date
             FROM placements p
             LEFT JOIN students s ON s.id = p.student_id
             LEFT JOIN companies c ON c.id = p.company_id
             WHERE p.user_id = $1 AND p.status = $2
             ORDER BY p.placement_date DESC, p.id DESC",
        )
        .bind(user_id)
        .bind(PlacementStatus::Confirmed.as_str())
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ConfirmedPlacement::from).collect())
    }
}
