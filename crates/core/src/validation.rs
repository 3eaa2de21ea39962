//! Business-rule checks the database does not enforce on its own.
//!
//! Required-field and format checks live on the request DTOs (`validator`
//! derive). The numeric bounds here are checked by handlers before any
//! insert or update is issued.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Upper bound of the CGPA scale (inclusive).
pub const MAX_CGPA: Decimal = Decimal::TEN;

/// Exclusive upper bound of a package; `NUMERIC(12,2)` holds ten integer digits.
pub const PACKAGE_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Decimal places stored for both `cgpa` and `package`.
pub const STORED_SCALE: u32 = 2;

/// Validate that a CGPA lies within `[0, 10]` with at most two decimal places.
pub fn validate_cgpa(cgpa: Decimal) -> Result<(), CoreError> {
    if cgpa < Decimal::ZERO || cgpa > MAX_CGPA {
        return Err(CoreError::Validation(
            "CGPA must be between 0 and 10".to_string(),
        ));
    }
    ensure_stored_scale("CGPA", cgpa)
}

/// Validate that a placement package is positive, below [`PACKAGE_LIMIT`],
/// and has at most two decimal places.
pub fn validate_package(package: Decimal) -> Result<(), CoreError> {
    if package <= Decimal::ZERO {
        return Err(CoreError::Validation(
            "Package must be greater than 0".to_string(),
        ));
    }
    if package >= PACKAGE_LIMIT {
        return Err(CoreError::Validation(format!(
            "Package must be less than {PACKAGE_LIMIT}"
        )));
    }
    ensure_stored_scale("Package", package)
}

/// The column would silently round extra digits, so reject them up front.
fn ensure_stored_scale(field: &str, value: Decimal) -> Result<(), CoreError> {
    if value.round_dp(STORED_SCALE) != value {
        return Err(CoreError::Validation(format!(
            "{field} must have at most {STORED_SCALE} decimal places"
        )));
    }
    Ok(())
}

/// Run `check` only when an optional field is present (partial updates).
pub fn validate_if_present<T: Copy>(
    value: Option<T>,
    check: fn(T) -> Result<(), CoreError>,
) -> Result<(), CoreError> {
    value.map_or(Ok(()), check)
}
