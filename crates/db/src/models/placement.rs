//! Placement entity model and DTOs.

use placement_core::stats::ConfirmedPlacement;
use placement_core::status::PlacementStatus;
use placement_core::types::{Date, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `placements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Placement {
    pub id: DbId,
    pub user_id: DbId,
    pub student_id: DbId,
    pub company_id: DbId,
    pub position: String,
    pub package: Decimal,
    pub placement_date: Date,
    #[sqlx(try_from = "String")]
    pub status: PlacementStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A placement joined with student and company display names (list view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacementWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub placement: Placement,
    pub student_name: Option<String>,
    pub company_name: Option<String>,
}

/// DTO for recording a placement.
///
/// The package bound is checked separately via
/// [`placement_core::validation::validate_package`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlacement {
    pub student_id: DbId,
    pub company_id: DbId,
    #[validate(length(min = 1, message = "is required"))]
    pub position: String,
    pub package: Decimal,
    pub placement_date: Date,
    /// Defaults to `Confirmed` when omitted.
    pub status: Option<PlacementStatus>,
}

/// DTO for updating a placement. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlacement {
    pub student_id: Option<DbId>,
    pub company_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub position: Option<String>,
    pub package: Option<Decimal>,
    pub placement_date: Option<Date>,
    pub status: Option<PlacementStatus>,
}

/// Projection of a confirmed placement used by the statistics endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct ConfirmedPlacementRow {
    pub student_id: DbId,
    pub student_name: Option<String>,
    pub company_name: Option<String>,
    pub position: String,
    pub package: Decimal,
    pub placement_date: Date,
}

impl From<ConfirmedPlacementRow> for ConfirmedPlacement {
    fn from(row: ConfirmedPlacementRow) -> Self {
        ConfirmedPlacement {
            student_id: row.student_id,
            student_name: row.student_name,
            company_name: row.company_name,
            position: row.position,
            package: row.package,
            placement_date: row.placement_date,
        }
    }
}
