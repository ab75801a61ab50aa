//! Dataset assembly and reproducible splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use waxlab_core::error::CoreError;
use waxlab_core::types::DbId;
use waxlab_db::models::test_session::TestSession;

use crate::features::{encode, Conditions, FeatureVector};

/// Fixed seed so every run produces the same partitions.
pub const RANDOM_SEED: u64 = 42;

/// Fraction of samples held out for final testing.
pub const TEST_FRACTION: f64 = 0.2;

/// Fraction of samples held out for validation.
pub const VALIDATION_FRACTION: f64 = 0.2;

/// One training sample: encoded conditions plus the observed outcome.
#[derive(Debug, Clone)]
pub struct Sample {
    pub session_id: DbId,
    pub features: FeatureVector,
    /// The wax that glided farther in this session.
    pub winning_wax_id: DbId,
    /// Unsigned winning margin in meters.
    pub margin_m: f64,
}

/// The wax id that won a session: the test wax when the test ski was
/// ahead, otherwise the reference wax.
pub fn winning_wax_id(session: &TestSession) -> DbId {
    if session.test_ski_won {
        session.test_wax_id
    } else {
        session.reference_wax_id
    }
}

/// Build one sample per session.
pub fn build_samples(sessions: &[TestSession]) -> Result<Vec<Sample>, CoreError> {
    sessions
        .iter()
        .map(|session| {
            let conditions = Conditions::from_session(session)?;
            Ok(Sample {
                session_id: session.id,
                features: encode(&conditions),
                winning_wax_id: winning_wax_id(session),
                margin_m: session.distance_between_skis.abs(),
            })
        })
        .collect()
}

/// Extract (conditions, winning wax) outcome pairs for fitting.
pub fn labeled_outcomes(sessions: &[TestSession]) -> Result<Vec<(Conditions, DbId)>, CoreError> {
    sessions
        .iter()
        .map(|session| Ok((Conditions::from_session(session)?, winning_wax_id(session))))
        .collect()
}

/// Train/validation/test partitions.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Vec<Sample>,
    pub validation: Vec<Sample>,
    pub test: Vec<Sample>,
}

/// Shuffle with a seeded RNG and partition by the configured fractions.
/// The same seed and input order always yield the same partitions.
pub fn split_samples(mut samples: Vec<Sample>, seed: u64) -> Split {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total = samples.len();
    let test_len = (total as f64 * TEST_FRACTION).round() as usize;
    let validation_len = (total as f64 * VALIDATION_FRACTION).round() as usize;

    let test = samples.split_off(total - test_len);
    let validation = samples.split_off(samples.len() - validation_len);

    Split {
        train: samples,
        validation,
        test,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use waxlab_core::conditions::SnowType;

    use crate::features::FEATURE_LEN;

    fn session(id: DbId, distance: f64, test_ski_won: bool) -> TestSession {
        let stamp = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        TestSession {
            id,
            test_date: stamp,
            location: "Östersund Training Track".into(),
            temperature: -5.0,
            humidity: None,
            wind_speed: None,
            precipitation: None,
            snow_type: "transformed".into(),
            snow_age_days: None,
            snow_temperature: None,
            snow_moisture: Some("dry".into()),
            track_condition: Some("firm".into()),
            course_length: 100.0,
            course_profile: None,
            test_method: None,
            reference_ski_id: 1,
            reference_wax_id: 10,
            reference_prep_notes: None,
            test_ski_id: 1,
            test_wax_id: 20,
            test_prep_notes: None,
            distance_between_skis: distance,
            test_ski_won,
            confidence_rating: Some(4),
            tester_name: None,
            notes: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn winning_wax_follows_the_flag() {
        assert_eq!(winning_wax_id(&session(1, 2.5, true)), 20);
        assert_eq!(winning_wax_id(&session(2, -1.8, false)), 10);
    }

    #[test]
    fn build_samples_encodes_each_session() {
        let sessions = [session(1, 2.5, true), session(2, -1.8, false)];
        let samples = build_samples(&sessions).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].session_id, 1);
        assert_eq!(samples[0].features.0.len(), FEATURE_LEN);
        assert_eq!(samples[0].winning_wax_id, 20);
        assert_eq!(samples[0].margin_m, 2.5);
        assert_eq!(samples[1].winning_wax_id, 10);
        assert_eq!(samples[1].margin_m, 1.8);
    }

    #[test]
    fn labeled_outcomes_carry_parsed_conditions() {
        let outcomes = labeled_outcomes(&[session(1, 2.5, true)]).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].0.snow_type, SnowType::Transformed);
        assert_eq!(outcomes[0].1, 20);
    }

    fn sample(id: DbId) -> Sample {
        Sample {
            session_id: id,
            features: FeatureVector(vec![0.0]),
            winning_wax_id: 1,
            margin_m: 1.0,
        }
    }

    fn ids(samples: &[Sample]) -> Vec<DbId> {
        samples.iter().map(|s| s.session_id).collect()
    }

    #[test]
    fn split_fractions_hold() {
        let split = split_samples((0..10).map(sample).collect(), RANDOM_SEED);
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.validation.len(), 2);
        assert_eq!(split.train.len(), 6);
    }

    #[test]
    fn split_is_deterministic_for_a_seed() {
        let a = split_samples((0..25).map(sample).collect(), RANDOM_SEED);
        let b = split_samples((0..25).map(sample).collect(), RANDOM_SEED);
        assert_eq!(ids(&a.train), ids(&b.train));
        assert_eq!(ids(&a.validation), ids(&b.validation));
        assert_eq!(ids(&a.test), ids(&b.test));
    }

    #[test]
    fn split_partitions_are_disjoint_and_complete() {
        let split = split_samples((0..25).map(sample).collect(), RANDOM_SEED);
        let mut all = ids(&split.train);
        all.extend(ids(&split.validation));
        all.extend(ids(&split.test));
        all.sort_unstable();
        assert_eq!(all, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn empty_input_splits_to_empty_partitions() {
        let split = split_samples(Vec::new(), RANDOM_SEED);
        assert!(split.train.is_empty());
        assert!(split.validation.is_empty());
        assert!(split.test.is_empty());
    }
}
