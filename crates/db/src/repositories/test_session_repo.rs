//! Repository for the `test_sessions` table.

use sqlx::PgExecutor;
use waxlab_core::catalog;
use waxlab_core::conditions::SnowType;
use waxlab_core::error::CoreError;
use waxlab_core::glide_test;
use waxlab_core::types::{DbId, Timestamp};

use crate::error::DbError;
use crate::models::test_session::{CreateTestSession, TestSession, UpdateTestSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, test_date, location, temperature, humidity, wind_speed, \
    precipitation, snow_type, snow_age_days, snow_temperature, snow_moisture, \
    track_condition, course_length, course_profile, test_method, \
    reference_ski_id, reference_wax_id, reference_prep_notes, \
    test_ski_id, test_wax_id, test_prep_notes, \
    distance_between_skis, test_ski_won, confidence_rating, \
    tester_name, notes, created_at, updated_at";

const ENTITY: &str = "test_session";

/// Provides CRUD operations for test sessions.
pub struct TestSessionRepo;

impl TestSessionRepo {
    /// Insert a new test session, returning the created row.
    ///
    /// All scalar invariants are validated in-process first so the caller
    /// gets a field-level message; a dangling catalog reference surfaces
    /// as `ReferentialIntegrity` from the insert itself, leaving no
    /// partial row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateTestSession,
    ) -> Result<TestSession, DbError> {
        validate_create(input)?;

        let query = format!(
            "INSERT INTO test_sessions
                (test_date, location, temperature, humidity, wind_speed,
                 precipitation, snow_type, snow_age_days, snow_temperature,
                 snow_moisture, track_condition, course_length, course_profile,
                 test_method, reference_ski_id, reference_wax_id,
                 reference_prep_notes, test_ski_id, test_wax_id,
                 test_prep_notes, distance_between_skis, test_ski_won,
                 confidence_rating, tester_name, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TestSession>(&query)
            .bind(input.test_date)
            .bind(&input.location)
            .bind(input.temperature)
            .bind(input.humidity)
            .bind(input.wind_speed)
            .bind(&input.precipitation)
            .bind(&input.snow_type)
            .bind(input.snow_age_days)
            .bind(input.snow_temperature)
            .bind(&input.snow_moisture)
            .bind(&input.track_condition)
            .bind(input.course_length)
            .bind(&input.course_profile)
            .bind(&input.test_method)
            .bind(input.reference_ski_id)
            .bind(input.reference_wax_id)
            .bind(&input.reference_prep_notes)
            .bind(input.test_ski_id)
            .bind(input.test_wax_id)
            .bind(&input.test_prep_notes)
            .bind(input.distance_between_skis)
            .bind(input.test_ski_won)
            .bind(input.confidence_rating)
            .bind(&input.tester_name)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))
    }

    /// Find a test session by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<TestSession>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM test_sessions WHERE id = $1");
        sqlx::query_as::<_, TestSession>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(DbError::from)
    }

    /// Fetch a test session by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<TestSession, DbError> {
        Self::find_by_id(executor, id)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// List all test sessions, most recent test date first.
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<TestSession>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM test_sessions ORDER BY test_date DESC, id DESC");
        sqlx::query_as::<_, TestSession>(&query)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// List test sessions recorded under one snow type, most recent first.
    pub async fn list_by_snow_type(
        executor: impl PgExecutor<'_>,
        snow_type: SnowType,
    ) -> Result<Vec<TestSession>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM test_sessions
             WHERE snow_type = $1
             ORDER BY test_date DESC, id DESC"
        );
        sqlx::query_as::<_, TestSession>(&query)
            .bind(snow_type.as_str())
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// List test sessions with `test_date` in `[from, to]` inclusive,
    /// oldest first.
    pub async fn list_by_date_range(
        executor: impl PgExecutor<'_>,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<TestSession>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM test_sessions
             WHERE test_date >= $1 AND test_date <= $2
             ORDER BY test_date ASC, id ASC"
        );
        sqlx::query_as::<_, TestSession>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// List test sessions in which a ski appears on either side, most
    /// recent first.
    pub async fn list_by_ski(
        executor: impl PgExecutor<'_>,
        ski_id: DbId,
    ) -> Result<Vec<TestSession>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM test_sessions
             WHERE reference_ski_id = $1 OR test_ski_id = $1
             ORDER BY test_date DESC, id DESC"
        );
        sqlx::query_as::<_, TestSession>(&query)
            .bind(ski_id)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// List test sessions in which a wax appears on either side, most
    /// recent first.
    pub async fn list_by_wax(
        executor: impl PgExecutor<'_>,
        wax_id: DbId,
    ) -> Result<Vec<TestSession>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM test_sessions
             WHERE reference_wax_id = $1 OR test_wax_id = $1
             ORDER BY test_date DESC, id DESC"
        );
        sqlx::query_as::<_, TestSession>(&query)
            .bind(wax_id)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// Update a test session. Only non-`None` fields in `input` are
    /// applied; `updated_at` is refreshed on every successful patch.
    ///
    /// Returns `None` if no row with the given `id` exists. Patched
    /// scalars are validated in-process; the distance/winner consistency
    /// of a partial patch (one side changed without the other) is caught
    /// by the schema CHECK and surfaced as a validation error, leaving
    /// the row untouched.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateTestSession,
    ) -> Result<Option<TestSession>, DbError> {
        validate_update(input)?;

        let query = format!(
            "UPDATE test_sessions SET
                test_date = COALESCE($2, test_date),
                location = COALESCE($3, location),
                temperature = COALESCE($4, temperature),
                humidity = COALESCE($5, humidity),
                wind_speed = COALESCE($6, wind_speed),
                precipitation = COALESCE($7, precipitation),
                snow_type = COALESCE($8, snow_type),
                snow_age_days = COALESCE($9, snow_age_days),
                snow_temperature = COALESCE($10, snow_temperature),
                snow_moisture = COALESCE($11, snow_moisture),
                track_condition = COALESCE($12, track_condition),
                course_length = COALESCE($13, course_length),
                course_profile = COALESCE($14, course_profile),
                test_method = COALESCE($15, test_method),
                reference_ski_id = COALESCE($16, reference_ski_id),
                reference_wax_id = COALESCE($17, reference_wax_id),
                reference_prep_notes = COALESCE($18, reference_prep_notes),
                test_ski_id = COALESCE($19, test_ski_id),
                test_wax_id = COALESCE($20, test_wax_id),
                test_prep_notes = COALESCE($21, test_prep_notes),
                distance_between_skis = COALESCE($22, distance_between_skis),
                test_ski_won = COALESCE($23, test_ski_won),
                confidence_rating = COALESCE($24, confidence_rating),
                tester_name = COALESCE($25, tester_name),
                notes = COALESCE($26, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TestSession>(&query)
            .bind(id)
            .bind(input.test_date)
            .bind(&input.location)
            .bind(input.temperature)
            .bind(input.humidity)
            .bind(input.wind_speed)
            .bind(&input.precipitation)
            .bind(&input.snow_type)
            .bind(input.snow_age_days)
            .bind(input.snow_temperature)
            .bind(&input.snow_moisture)
            .bind(&input.track_condition)
            .bind(input.course_length)
            .bind(&input.course_profile)
            .bind(&input.test_method)
            .bind(input.reference_ski_id)
            .bind(input.reference_wax_id)
            .bind(&input.reference_prep_notes)
            .bind(input.test_ski_id)
            .bind(input.test_wax_id)
            .bind(&input.test_prep_notes)
            .bind(input.distance_between_skis)
            .bind(input.test_ski_won)
            .bind(input.confidence_rating)
            .bind(&input.tester_name)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))
    }

    /// Delete a test session by ID. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM test_sessions WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all recorded test sessions.
    pub async fn count(executor: impl PgExecutor<'_>) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM test_sessions")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}

fn validate_create(input: &CreateTestSession) -> Result<(), CoreError> {
    catalog::validate_required_text(&input.location, "location")?;
    input.snow_type.parse::<SnowType>()?;
    glide_test::validate_course_length(input.course_length)?;
    glide_test::validate_outcome(input.distance_between_skis, input.test_ski_won)?;
    if let Some(rating) = input.confidence_rating {
        glide_test::validate_confidence_rating(rating)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateTestSession) -> Result<(), CoreError> {
    if let Some(ref location) = input.location {
        catalog::validate_required_text(location, "location")?;
    }
    if let Some(ref snow_type) = input.snow_type {
        snow_type.parse::<SnowType>()?;
    }
    if let Some(course_length) = input.course_length {
        glide_test::validate_course_length(course_length)?;
    }
    match (input.distance_between_skis, input.test_ski_won) {
        (Some(distance), Some(won)) => glide_test::validate_outcome(distance, won)?,
        (Some(distance), None) => glide_test::validate_distance(distance)?,
        _ => {}
    }
    if let Some(rating) = input.confidence_rating {
        glide_test::validate_confidence_rating(rating)?;
    }
    Ok(())
}
