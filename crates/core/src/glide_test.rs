//! Comparative glide test constants and validation.
//!
//! A test session records the signed separation between a reference and a
//! test ski after a shared run. These bounds and consistency rules are
//! enforced before any insert and mirrored as schema CHECK constraints.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Course length bounds
// ---------------------------------------------------------------------------

/// Minimum test course length in meters.
pub const MIN_COURSE_LENGTH_M: f64 = 10.0;

/// Maximum test course length in meters.
pub const MAX_COURSE_LENGTH_M: f64 = 500.0;

// ---------------------------------------------------------------------------
// Outcome bounds
// ---------------------------------------------------------------------------

/// Maximum plausible separation between the skis in meters.
pub const MAX_DISTANCE_BETWEEN_SKIS_M: f64 = 50.0;

/// Minimum confidence rating (inclusive).
pub const CONFIDENCE_RATING_MIN: i32 = 1;

/// Maximum confidence rating (inclusive).
pub const CONFIDENCE_RATING_MAX: i32 = 5;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a course length lies within
/// [`MIN_COURSE_LENGTH_M`, `MAX_COURSE_LENGTH_M`] inclusive.
pub fn validate_course_length(course_length_m: f64) -> Result<(), CoreError> {
    if !(MIN_COURSE_LENGTH_M..=MAX_COURSE_LENGTH_M).contains(&course_length_m) {
        return Err(CoreError::Validation(format!(
            "course_length must be between {MIN_COURSE_LENGTH_M} and \
             {MAX_COURSE_LENGTH_M} meters, got {course_length_m}"
        )));
    }
    Ok(())
}

/// Validate the signed distance between skis.
///
/// Zero is rejected: a zero separation has no consistent winner, so a
/// record claiming one is a data-integrity error rather than a tie.
pub fn validate_distance(distance_m: f64) -> Result<(), CoreError> {
    if distance_m == 0.0 {
        return Err(CoreError::Validation(
            "distance_between_skis must be non-zero; a dead heat is not a recordable outcome"
                .to_string(),
        ));
    }
    if distance_m.abs() > MAX_DISTANCE_BETWEEN_SKIS_M {
        return Err(CoreError::Validation(format!(
            "distance_between_skis magnitude must not exceed \
             {MAX_DISTANCE_BETWEEN_SKIS_M} meters, got {distance_m}"
        )));
    }
    Ok(())
}

/// Validate that the winner flag agrees with the sign of the distance
/// (positive distance means the test ski glided farther).
pub fn validate_outcome(distance_m: f64, test_ski_won: bool) -> Result<(), CoreError> {
    validate_distance(distance_m)?;
    if (distance_m > 0.0) != test_ski_won {
        return Err(CoreError::Validation(format!(
            "test_ski_won = {test_ski_won} contradicts distance_between_skis = {distance_m}"
        )));
    }
    Ok(())
}

/// Validate that a confidence rating lies within
/// [`CONFIDENCE_RATING_MIN`, `CONFIDENCE_RATING_MAX`] inclusive.
pub fn validate_confidence_rating(rating: i32) -> Result<(), CoreError> {
    if !(CONFIDENCE_RATING_MIN..=CONFIDENCE_RATING_MAX).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "confidence_rating must be between {CONFIDENCE_RATING_MIN} and \
             {CONFIDENCE_RATING_MAX}, got {rating}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_course_length ---------------------------------------------

    #[test]
    fn course_length_at_minimum_accepted() {
        assert!(validate_course_length(MIN_COURSE_LENGTH_M).is_ok());
    }

    #[test]
    fn course_length_at_maximum_accepted() {
        assert!(validate_course_length(MAX_COURSE_LENGTH_M).is_ok());
    }

    #[test]
    fn course_length_below_minimum_rejected() {
        assert!(validate_course_length(5.0).is_err());
    }

    #[test]
    fn course_length_above_maximum_rejected() {
        assert!(validate_course_length(501.0).is_err());
    }

    // -- validate_distance --------------------------------------------------

    #[test]
    fn distance_within_bounds_accepted() {
        assert!(validate_distance(2.5).is_ok());
        assert!(validate_distance(-1.8).is_ok());
        assert!(validate_distance(MAX_DISTANCE_BETWEEN_SKIS_M).is_ok());
        assert!(validate_distance(-MAX_DISTANCE_BETWEEN_SKIS_M).is_ok());
    }

    #[test]
    fn zero_distance_rejected() {
        assert!(validate_distance(0.0).is_err());
    }

    #[test]
    fn distance_beyond_maximum_rejected() {
        assert!(validate_distance(50.1).is_err());
        assert!(validate_distance(-50.1).is_err());
    }

    // -- validate_outcome ---------------------------------------------------

    #[test]
    fn positive_distance_with_test_win_accepted() {
        assert!(validate_outcome(2.5, true).is_ok());
    }

    #[test]
    fn negative_distance_with_reference_win_accepted() {
        assert!(validate_outcome(-1.8, false).is_ok());
    }

    #[test]
    fn positive_distance_with_test_loss_rejected() {
        assert!(validate_outcome(2.5, false).is_err());
    }

    #[test]
    fn negative_distance_with_test_win_rejected() {
        assert!(validate_outcome(-1.8, true).is_err());
    }

    #[test]
    fn zero_distance_rejected_regardless_of_flag() {
        assert!(validate_outcome(0.0, true).is_err());
        assert!(validate_outcome(0.0, false).is_err());
    }

    // -- validate_confidence_rating -----------------------------------------

    #[test]
    fn confidence_rating_boundaries_accepted() {
        assert!(validate_confidence_rating(CONFIDENCE_RATING_MIN).is_ok());
        assert!(validate_confidence_rating(3).is_ok());
        assert!(validate_confidence_rating(CONFIDENCE_RATING_MAX).is_ok());
    }

    #[test]
    fn confidence_rating_out_of_range_rejected() {
        assert!(validate_confidence_rating(0).is_err());
        assert!(validate_confidence_rating(6).is_err());
    }
}
