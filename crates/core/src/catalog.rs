//! Validation for catalog reference data (ski models and wax products).

use crate::error::CoreError;

/// Validate that a required text field is non-empty (whitespace-only
/// counts as empty).
pub fn validate_required_text(value: &str, field: &'static str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a model year, when present, is a positive integer.
pub fn validate_model_year(year: Option<i32>) -> Result<(), CoreError> {
    if let Some(year) = year {
        if year <= 0 {
            return Err(CoreError::Validation(format!(
                "year must be positive, got {year}"
            )));
        }
    }
    Ok(())
}

/// Validate that a wax temperature range is ordered when both ends are
/// present.
pub fn validate_temp_range(low_c: Option<f64>, high_c: Option<f64>) -> Result<(), CoreError> {
    if let (Some(low), Some(high)) = (low_c, high_c) {
        if low > high {
            return Err(CoreError::Validation(format!(
                "temp_range_low ({low}) must not exceed temp_range_high ({high})"
            )));
        }
    }
    Ok(())
}
