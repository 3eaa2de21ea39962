//! Company entity model and DTOs.

use placement_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub website: Option<String>,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new company. Only `website` may be omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub industry: String,
    #[validate(length(min = 1, message = "is required"))]
    pub location: String,
    pub website: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub contact_person: String,
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub contact_phone: String,
}

/// DTO for updating an existing company. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompany {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub industry: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,
    pub website: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub contact_person: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub contact_phone: Option<String>,
}
