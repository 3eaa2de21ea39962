//! Student entity model and DTOs.

use placement_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub graduation_year: i32,
    /// Two decimal places, `0.00..=10.00`.
    pub cgpa: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student. All fields are required.
///
/// The CGPA bound is checked separately via
/// [`placement_core::validation::validate_cgpa`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "is required"))]
    pub department: String,
    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub graduation_year: i32,
    pub cgpa: Decimal,
}

/// DTO for updating an existing student. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub department: Option<String>,
    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub graduation_year: Option<i32>,
    pub cgpa: Option<Decimal>,
}
