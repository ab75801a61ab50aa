//! Illustrative sample data for demonstration and bootstrapping.
//!
//! The whole load runs in a single transaction: if any insert fails,
//! every already-applied insert in the batch is rolled back.

use chrono::{TimeZone, Utc};
use waxlab_core::types::Timestamp;

use crate::error::DbError;
use crate::models::ski_model::{CreateSkiModel, SkiModel};
use crate::models::test_session::CreateTestSession;
use crate::models::wax_product::{CreateWaxProduct, WaxProduct};
use crate::repositories::{SkiModelRepo, TestSessionRepo, WaxProductRepo};
use crate::DbPool;

/// Row counts inserted by [`populate_sample_data`].
#[derive(Debug, Clone, Copy)]
pub struct SampleDataSummary {
    pub ski_models: usize,
    pub wax_products: usize,
    pub test_sessions: usize,
}

/// Insert the fixed sample catalog and test sessions, all-or-nothing.
pub async fn populate_sample_data(pool: &DbPool) -> Result<SampleDataSummary, DbError> {
    let mut tx = pool.begin().await?;

    let mut skis = Vec::new();
    for input in sample_ski_models() {
        skis.push(SkiModelRepo::create(&mut *tx, &input).await?);
    }
    tracing::info!(count = skis.len(), "Created sample ski models");

    let mut waxes = Vec::new();
    for input in sample_wax_products() {
        waxes.push(WaxProductRepo::create(&mut *tx, &input).await?);
    }
    tracing::info!(count = waxes.len(), "Created sample wax products");

    let sessions = sample_test_sessions(&skis, &waxes);
    let session_count = sessions.len();
    for input in &sessions {
        TestSessionRepo::create(&mut *tx, input).await?;
    }
    tracing::info!(count = session_count, "Created sample test sessions");

    tx.commit().await?;

    Ok(SampleDataSummary {
        ski_models: skis.len(),
        wax_products: waxes.len(),
        test_sessions: session_count,
    })
}

fn sample_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("sample timestamps are valid")
}

fn sample_ski_models() -> Vec<CreateSkiModel> {
    vec![
        CreateSkiModel {
            brand: "Fischer".into(),
            model: "Speedmax 3D".into(),
            year: Some(2024),
            category: Some("skate".into()),
            notes: Some("High-performance racing ski".into()),
        },
        CreateSkiModel {
            brand: "Rossignol".into(),
            model: "X-IUM Premium".into(),
            year: Some(2023),
            category: Some("classic".into()),
            notes: Some("World Cup level classic ski".into()),
        },
        CreateSkiModel {
            brand: "Atomic".into(),
            model: "Redster S9".into(),
            year: Some(2024),
            category: Some("skate".into()),
            notes: Some("Competition skate ski".into()),
        },
        CreateSkiModel {
            brand: "Madshus".into(),
            model: "Race Speed".into(),
            year: Some(2023),
            category: Some("classic".into()),
            notes: Some("Training and racing classic ski".into()),
        },
    ]
}

fn sample_wax_products() -> Vec<CreateWaxProduct> {
    vec![
        CreateWaxProduct {
            brand: "Swix".into(),
            product_name: "CH7X Blue".into(),
            wax_type: "glide".into(),
            temp_range_low: Some(-8.0),
            temp_range_high: Some(-4.0),
            color_code: Some("blue".into()),
            application_method: Some("hot wax".into()),
            notes: Some("Cold conditions glider".into()),
        },
        CreateWaxProduct {
            brand: "Swix".into(),
            product_name: "CH8X Red".into(),
            wax_type: "glide".into(),
            temp_range_low: Some(-4.0),
            temp_range_high: Some(0.0),
            color_code: Some("red".into()),
            application_method: Some("hot wax".into()),
            notes: Some("Medium cold conditions".into()),
        },
        CreateWaxProduct {
            brand: "Swix".into(),
            product_name: "CH10X Yellow".into(),
            wax_type: "glide".into(),
            temp_range_low: Some(0.0),
            temp_range_high: Some(10.0),
            color_code: Some("yellow".into()),
            application_method: Some("hot wax".into()),
            notes: Some("Warm/wet conditions".into()),
        },
        CreateWaxProduct {
            brand: "Toko".into(),
            product_name: "JetStream Block 2.0 Blue".into(),
            wax_type: "glide".into(),
            temp_range_low: Some(-10.0),
            temp_range_high: Some(0.0),
            color_code: Some("blue".into()),
            application_method: Some("rub-on".into()),
            notes: Some("High-fluorine racing wax".into()),
        },
        CreateWaxProduct {
            brand: "Start".into(),
            product_name: "LF04".into(),
            wax_type: "glide".into(),
            temp_range_low: Some(-6.0),
            temp_range_high: Some(-2.0),
            color_code: Some("violet".into()),
            application_method: Some("hot wax".into()),
            notes: Some("Low-fluorine racing wax".into()),
        },
        CreateWaxProduct {
            brand: "Rex".into(),
            product_name: "HF21 Green".into(),
            wax_type: "glide".into(),
            temp_range_low: Some(-1.0),
            temp_range_high: Some(10.0),
            color_code: Some("green".into()),
            application_method: Some("hot wax".into()),
            notes: Some("Warm conditions, high performance".into()),
        },
    ]
}

fn sample_test_sessions(skis: &[SkiModel], waxes: &[WaxProduct]) -> Vec<CreateTestSession> {
    vec![
        CreateTestSession {
            test_date: sample_date(2025, 1, 15, 10, 30),
            location: "Östersund Training Track".into(),
            temperature: -5.0,
            humidity: Some(65.0),
            wind_speed: Some(2.5),
            precipitation: Some("none".into()),
            snow_type: "transformed".into(),
            snow_age_days: Some(3),
            snow_temperature: Some(-4.0),
            snow_moisture: Some("dry".into()),
            track_condition: Some("firm".into()),
            course_length: 100.0,
            course_profile: Some("flat".into()),
            test_method: Some("Side-by-side glide test, released simultaneously".into()),
            reference_ski_id: skis[0].id,
            reference_wax_id: waxes[0].id,
            reference_prep_notes: Some("Hot waxed, scraped, brushed with brass and nylon".into()),
            test_ski_id: skis[0].id,
            test_wax_id: waxes[1].id,
            test_prep_notes: Some("Hot waxed, scraped, brushed with brass and nylon".into()),
            distance_between_skis: 2.5,
            test_ski_won: true,
            confidence_rating: Some(4),
            tester_name: Some("Jakob Nilsson".into()),
            notes: Some("Red wax performed better than expected in these conditions".into()),
        },
        CreateTestSession {
            test_date: sample_date(2025, 1, 20, 9, 15),
            location: "Östersund Training Track".into(),
            temperature: -7.0,
            humidity: Some(70.0),
            wind_speed: Some(1.0),
            precipitation: Some("light snow".into()),
            snow_type: "new".into(),
            snow_age_days: Some(0),
            snow_temperature: Some(-6.0),
            snow_moisture: Some("dry".into()),
            track_condition: Some("soft".into()),
            course_length: 100.0,
            course_profile: Some("slight_incline".into()),
            test_method: Some("Side-by-side glide test on fresh track".into()),
            reference_ski_id: skis[2].id,
            reference_wax_id: waxes[0].id,
            reference_prep_notes: Some("Hot waxed twice, carefully scraped".into()),
            test_ski_id: skis[2].id,
            test_wax_id: waxes[3].id,
            test_prep_notes: Some("Rub-on application, polished with cork".into()),
            distance_between_skis: -1.8,
            test_ski_won: false,
            confidence_rating: Some(5),
            tester_name: Some("Jakob Nilsson".into()),
            notes: Some("Blue hot wax superior to rub-on in cold new snow".into()),
        },
        CreateTestSession {
            test_date: sample_date(2025, 2, 5, 14, 0),
            location: "Falun Stadium".into(),
            temperature: -1.0,
            humidity: Some(85.0),
            wind_speed: Some(0.5),
            precipitation: Some("none".into()),
            snow_type: "old".into(),
            snow_age_days: Some(7),
            snow_temperature: Some(-0.5),
            snow_moisture: Some("moist".into()),
            track_condition: Some("firm".into()),
            course_length: 150.0,
            course_profile: Some("flat".into()),
            test_method: Some("Timed runs, averaged over 3 attempts".into()),
            reference_ski_id: skis[1].id,
            reference_wax_id: waxes[1].id,
            reference_prep_notes: Some("Standard prep, brass brush finish".into()),
            test_ski_id: skis[3].id,
            test_wax_id: waxes[2].id,
            test_prep_notes: Some("Hot wax, plastic scraper, fine bronze brush".into()),
            distance_between_skis: 3.2,
            test_ski_won: true,
            confidence_rating: Some(4),
            tester_name: Some("Jakob Nilsson".into()),
            notes: Some("Yellow wax clearly better in warm, moist conditions".into()),
        },
    ]
}
