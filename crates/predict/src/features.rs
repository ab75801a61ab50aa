//! Feature engineering for test session conditions.
//!
//! Encoding layout, in order: temperature bin one-hot, snow type one-hot,
//! then one-hot blocks (each with a trailing "other" bucket) for snow
//! moisture, track condition, precipitation, and course profile, and
//! finally the raw course length. `None` in an optional field encodes as
//! an all-zero block; only an unknown non-null label sets "other".

use waxlab_core::conditions::{
    SnowType, COURSE_PROFILE_LABELS, PRECIPITATION_LABELS, SNOW_MOISTURE_LABELS,
    TRACK_CONDITION_LABELS,
};
use waxlab_core::error::CoreError;
use waxlab_db::models::test_session::TestSession;

/// Temperature bin edges in degrees Celsius, ascending.
pub const TEMPERATURE_BIN_EDGES: [f64; 8] = [-20.0, -10.0, -5.0, -2.0, 0.0, 2.0, 5.0, 10.0];

/// Number of temperature bins (one more than the edge count: everything
/// below the first edge and at-or-above each edge).
pub const TEMPERATURE_BIN_COUNT: usize = TEMPERATURE_BIN_EDGES.len() + 1;

/// Total encoded feature vector length.
pub const FEATURE_LEN: usize = TEMPERATURE_BIN_COUNT
    + SnowType::ALL.len()
    + (SNOW_MOISTURE_LABELS.len() + 1)
    + (TRACK_CONDITION_LABELS.len() + 1)
    + (PRECIPITATION_LABELS.len() + 1)
    + (COURSE_PROFILE_LABELS.len() + 1)
    + 1;

/// The observed conditions a recommendation is requested for, and the
/// subset of session fields the feature encoding consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub temperature: f64,
    pub snow_type: SnowType,
    pub snow_moisture: Option<String>,
    pub track_condition: Option<String>,
    pub precipitation: Option<String>,
    pub course_profile: Option<String>,
    pub course_length: f64,
}

impl Conditions {
    /// Extract the condition fields from a stored test session.
    ///
    /// Fails if the stored snow type is outside the known set (possible
    /// only if the schema CHECK and this enum have drifted apart).
    pub fn from_session(session: &TestSession) -> Result<Self, CoreError> {
        Ok(Self {
            temperature: session.temperature,
            snow_type: session.snow_type.parse()?,
            snow_moisture: session.snow_moisture.clone(),
            track_condition: session.track_condition.clone(),
            precipitation: session.precipitation.clone(),
            course_profile: session.course_profile.clone(),
            course_length: session.course_length,
        })
    }
}

/// An encoded feature vector of length [`FEATURE_LEN`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(pub Vec<f64>);

/// Return the bin index for an ambient temperature: the number of edges
/// at or below it, so index 0 is "below -20" and the last index is
/// "10 and above".
pub fn temperature_bin(temp_c: f64) -> usize {
    TEMPERATURE_BIN_EDGES
        .iter()
        .filter(|edge| temp_c >= **edge)
        .count()
}

/// Encode observed conditions into a fixed-length feature vector.
pub fn encode(conditions: &Conditions) -> FeatureVector {
    let mut features = Vec::with_capacity(FEATURE_LEN);

    push_one_hot_index(
        &mut features,
        temperature_bin(conditions.temperature),
        TEMPERATURE_BIN_COUNT,
    );

    let snow_index = SnowType::ALL
        .iter()
        .position(|v| *v == conditions.snow_type)
        .unwrap_or_default();
    push_one_hot_index(&mut features, snow_index, SnowType::ALL.len());

    push_one_hot_label(
        &mut features,
        conditions.snow_moisture.as_deref(),
        &SNOW_MOISTURE_LABELS,
    );
    push_one_hot_label(
        &mut features,
        conditions.track_condition.as_deref(),
        &TRACK_CONDITION_LABELS,
    );
    push_one_hot_label(
        &mut features,
        conditions.precipitation.as_deref(),
        &PRECIPITATION_LABELS,
    );
    push_one_hot_label(
        &mut features,
        conditions.course_profile.as_deref(),
        &COURSE_PROFILE_LABELS,
    );

    features.push(conditions.course_length);

    debug_assert_eq!(features.len(), FEATURE_LEN);
    FeatureVector(features)
}

fn push_one_hot_index(features: &mut Vec<f64>, index: usize, width: usize) {
    for i in 0..width {
        features.push(if i == index { 1.0 } else { 0.0 });
    }
}

/// One-hot over a known vocabulary plus a trailing "other" bucket.
fn push_one_hot_label(features: &mut Vec<f64>, label: Option<&str>, vocabulary: &[&str]) {
    let position = label.map(|l| vocabulary.iter().position(|v| *v == l));
    for i in 0..vocabulary.len() {
        features.push(if position == Some(Some(i)) { 1.0 } else { 0.0 });
    }
    // "other": present but not in the vocabulary.
    features.push(if position == Some(None) { 1.0 } else { 0.0 });
}
