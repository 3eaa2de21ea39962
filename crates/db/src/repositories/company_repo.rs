//! Repository for the `companies` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

const COLUMNS: &str = "id, user_id, name, industry, location, website, contact_person, \
                       contact_email, contact_phone, created_at, updated_at";

/// Provides owner-scoped CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (user_id, name, industry, location, website,
                                    contact_person, contact_email, contact_phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.location)
            .bind(&input.website)
            .bind(&input.contact_person)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's companies, most recently created first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM companies WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a company. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($3, name),
                industry = COALESCE($4, industry),
                location = COALESCE($5, location),
                website = COALESCE($6, website),
                contact_person = COALESCE($7, contact_person),
                contact_email = COALESCE($8, contact_email),
                contact_phone = COALESCE($9, contact_phone)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.location)
            .bind(&input.website)
            .bind(&input.contact_person)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a company and, by cascade, its interviews and placements.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
