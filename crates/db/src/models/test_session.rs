//! Test session entity and DTOs.
//!
//! A test session is one comparative glide trial: a reference (ski, wax)
//! pair against a test (ski, wax) pair on a shared course under one
//! observed condition. The outcome is the signed separation between the
//! skis in meters (positive = test ski ahead) plus a winner flag that must
//! agree with the sign.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlab_core::types::{DbId, Timestamp};

/// A row from the `test_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestSession {
    pub id: DbId,
    pub test_date: Timestamp,
    pub location: String,

    // Weather conditions
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<String>,

    // Snow conditions
    /// One of "new", "old", "transformed", "artificial", "mixed".
    pub snow_type: String,
    pub snow_age_days: Option<i32>,
    pub snow_temperature: Option<f64>,
    pub snow_moisture: Option<String>,
    pub track_condition: Option<String>,

    // Test setup
    pub course_length: f64,
    pub course_profile: Option<String>,
    pub test_method: Option<String>,

    // Reference ski (baseline for comparison)
    pub reference_ski_id: DbId,
    pub reference_wax_id: DbId,
    pub reference_prep_notes: Option<String>,

    // Test ski (the one being evaluated)
    pub test_ski_id: DbId,
    pub test_wax_id: DbId,
    pub test_prep_notes: Option<String>,

    // Outcome
    pub distance_between_skis: f64,
    pub test_ski_won: bool,
    pub confidence_rating: Option<i32>,

    pub tester_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new test session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestSession {
    pub test_date: Timestamp,
    pub location: String,

    pub temperature: f64,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<String>,

    pub snow_type: String,
    pub snow_age_days: Option<i32>,
    pub snow_temperature: Option<f64>,
    pub snow_moisture: Option<String>,
    pub track_condition: Option<String>,

    pub course_length: f64,
    pub course_profile: Option<String>,
    pub test_method: Option<String>,

    pub reference_ski_id: DbId,
    pub reference_wax_id: DbId,
    pub reference_prep_notes: Option<String>,

    pub test_ski_id: DbId,
    pub test_wax_id: DbId,
    pub test_prep_notes: Option<String>,

    pub distance_between_skis: f64,
    pub test_ski_won: bool,
    pub confidence_rating: Option<i32>,

    pub tester_name: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing test session. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestSession {
    pub test_date: Option<Timestamp>,
    pub location: Option<String>,

    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<String>,

    pub snow_type: Option<String>,
    pub snow_age_days: Option<i32>,
    pub snow_temperature: Option<f64>,
    pub snow_moisture: Option<String>,
    pub track_condition: Option<String>,

    pub course_length: Option<f64>,
    pub course_profile: Option<String>,
    pub test_method: Option<String>,

    pub reference_ski_id: Option<DbId>,
    pub reference_wax_id: Option<DbId>,
    pub reference_prep_notes: Option<String>,

    pub test_ski_id: Option<DbId>,
    pub test_wax_id: Option<DbId>,
    pub test_prep_notes: Option<String>,

    pub distance_between_skis: Option<f64>,
    pub test_ski_won: Option<bool>,
    pub confidence_rating: Option<i32>,

    pub tester_name: Option<String>,
    pub notes: Option<String>,
}
