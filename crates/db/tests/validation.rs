//! Integration tests for invariant enforcement at the persistence
//! boundary: inconsistent outcomes, bound violations, and partial patches
//! that would break cross-field invariants.

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use waxlab_core::error::CoreError;
use waxlab_core::types::DbId;
use waxlab_db::models::ski_model::CreateSkiModel;
use waxlab_db::models::test_session::{CreateTestSession, UpdateTestSession};
use waxlab_db::models::wax_product::CreateWaxProduct;
use waxlab_db::repositories::{SkiModelRepo, TestSessionRepo, WaxProductRepo};
use waxlab_db::DbError;

async fn catalog_pair(pool: &PgPool) -> (DbId, DbId) {
    let ski = SkiModelRepo::create(
        pool,
        &CreateSkiModel {
            brand: "Fischer".to_string(),
            model: "Speedmax 3D".to_string(),
            year: Some(2024),
            category: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    let wax = WaxProductRepo::create(
        pool,
        &CreateWaxProduct {
            brand: "Swix".to_string(),
            product_name: "CH7X Blue".to_string(),
            wax_type: "glide".to_string(),
            temp_range_low: None,
            temp_range_high: None,
            color_code: None,
            application_method: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    (ski.id, wax.id)
}

fn session(ski_id: DbId, wax_id: DbId) -> CreateTestSession {
    CreateTestSession {
        test_date: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        location: "Falun Stadium".to_string(),
        temperature: -5.0,
        humidity: None,
        wind_speed: None,
        precipitation: None,
        snow_type: "transformed".to_string(),
        snow_age_days: None,
        snow_temperature: None,
        snow_moisture: None,
        track_condition: None,
        course_length: 100.0,
        course_profile: None,
        test_method: None,
        reference_ski_id: ski_id,
        reference_wax_id: wax_id,
        reference_prep_notes: None,
        test_ski_id: ski_id,
        test_wax_id: wax_id,
        test_prep_notes: None,
        distance_between_skis: 2.5,
        test_ski_won: true,
        confidence_rating: None,
        tester_name: None,
        notes: None,
    }
}

async fn assert_create_rejected(pool: &PgPool, input: CreateTestSession) {
    let err = TestSessionRepo::create(pool, &input).await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
    assert_eq!(TestSessionRepo::count(pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Outcome consistency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_positive_distance_with_loss_flag_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.test_ski_won = false;
    assert_create_rejected(&pool, input).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_distance_with_win_flag_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.distance_between_skis = -1.8;
    assert_create_rejected(&pool, input).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_distance_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.distance_between_skis = 0.0;
    assert_create_rejected(&pool, input).await;
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_length_below_minimum_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.course_length = 5.0;
    assert_create_rejected(&pool, input).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_length_boundaries_accepted(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;

    let mut at_min = session(ski, wax);
    at_min.course_length = 10.0;
    TestSessionRepo::create(&pool, &at_min).await.unwrap();

    let mut at_max = session(ski, wax);
    at_max.course_length = 500.0;
    TestSessionRepo::create(&pool, &at_max).await.unwrap();

    assert_eq!(TestSessionRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_distance_magnitude_beyond_maximum_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.distance_between_skis = 50.1;
    assert_create_rejected(&pool, input).await;

    let mut negative = session(ski, wax);
    negative.distance_between_skis = -50.1;
    negative.test_ski_won = false;
    assert_create_rejected(&pool, negative).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_confidence_rating_out_of_range_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.confidence_rating = Some(6);
    assert_create_rejected(&pool, input).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_snow_type_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.snow_type = "slush".to_string();
    assert_create_rejected(&pool, input).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_location_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let mut input = session(ski, wax);
    input.location = "  ".to_string();
    assert_create_rejected(&pool, input).await;
}

// ---------------------------------------------------------------------------
// Catalog validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_brand_rejected(pool: PgPool) {
    let err = SkiModelRepo::create(
        &pool,
        &CreateSkiModel {
            brand: String::new(),
            model: "Speedmax 3D".to_string(),
            year: None,
            category: None,
            notes: None,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_temp_range_rejected(pool: PgPool) {
    let err = WaxProductRepo::create(
        &pool,
        &CreateWaxProduct {
            brand: "Swix".to_string(),
            product_name: "CH10X Yellow".to_string(),
            wax_type: "glide".to_string(),
            temp_range_low: Some(10.0),
            temp_range_high: Some(0.0),
            color_code: None,
            application_method: None,
            notes: None,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Partial patches cannot break cross-field invariants
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_patch_breaking_outcome_consistency_rejected(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let created = TestSessionRepo::create(&pool, &session(ski, wax))
        .await
        .unwrap();

    // Flipping only the winner flag contradicts the stored positive
    // distance; the schema CHECK rejects it atomically.
    let err = TestSessionRepo::update(
        &pool,
        created.id,
        &UpdateTestSession {
            test_ski_won: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    // The row is untouched.
    let fetched = TestSessionRepo::get_by_id(&pool, created.id).await.unwrap();
    assert!(fetched.test_ski_won);
    assert_eq!(fetched.distance_between_skis, 2.5);
    assert_eq!(fetched.updated_at, created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_consistent_full_patch_accepted(pool: PgPool) {
    let (ski, wax) = catalog_pair(&pool).await;
    let created = TestSessionRepo::create(&pool, &session(ski, wax))
        .await
        .unwrap();

    let updated = TestSessionRepo::update(
        &pool,
        created.id,
        &UpdateTestSession {
            distance_between_skis: Some(-0.5),
            test_ski_won: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.distance_between_skis, -0.5);
    assert!(!updated.test_ski_won);
}
