//! Gated wax recommendation interface.
//!
//! Recommendations are withheld until enough historical sessions exist
//! and the winning wax under the matching conditions is clear enough.

use std::collections::HashMap;

use serde::Serialize;
use waxlab_core::conditions::SnowType;
use waxlab_core::types::DbId;

use crate::features::{temperature_bin, Conditions};

/// Minimum recorded test sessions before any recommendation is made.
pub const MIN_SAMPLES_FOR_PREDICTION: usize = 20;

/// Minimum confidence score for a recommendation to be returned.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// A recommended wax with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub wax_id: DbId,
    /// Number of historical sessions matching the queried conditions.
    pub support: usize,
    /// Fraction of matching sessions this wax won, in [0, 1].
    pub confidence: f64,
}

/// A model that recommends a wax for observed conditions, or declines
/// when the evidence is insufficient.
pub trait WaxRecommender {
    /// Recommend a wax, or `None` when under-sampled or under-confident.
    fn recommend(&self, conditions: &Conditions) -> Option<Recommendation>;
}

/// Conditions bucket used to group comparable sessions: snow type plus
/// ambient temperature bin.
type ConditionKey = (SnowType, usize);

fn condition_key(conditions: &Conditions) -> ConditionKey {
    (conditions.snow_type, temperature_bin(conditions.temperature))
}

/// Baseline recommender: the most frequent historical winner among
/// sessions recorded under the same snow type and temperature bin.
#[derive(Debug, Default)]
pub struct ConditionFrequencyRecommender {
    winners_by_key: HashMap<ConditionKey, Vec<DbId>>,
    total_outcomes: usize,
}

impl ConditionFrequencyRecommender {
    /// Fit the baseline from (conditions, winning wax) outcome pairs.
    pub fn fit(outcomes: &[(Conditions, DbId)]) -> Self {
        let mut winners_by_key: HashMap<ConditionKey, Vec<DbId>> = HashMap::new();
        for (conditions, wax_id) in outcomes {
            winners_by_key
                .entry(condition_key(conditions))
                .or_default()
                .push(*wax_id);
        }
        Self {
            winners_by_key,
            total_outcomes: outcomes.len(),
        }
    }
}

impl WaxRecommender for ConditionFrequencyRecommender {
    fn recommend(&self, conditions: &Conditions) -> Option<Recommendation> {
        if self.total_outcomes < MIN_SAMPLES_FOR_PREDICTION {
            tracing::debug!(
                total = self.total_outcomes,
                required = MIN_SAMPLES_FOR_PREDICTION,
                "Too few recorded sessions for a recommendation"
            );
            return None;
        }

        let winners = self.winners_by_key.get(&condition_key(conditions))?;
        let support = winners.len();

        let mut wins_per_wax: HashMap<DbId, usize> = HashMap::new();
        for wax_id in winners {
            *wins_per_wax.entry(*wax_id).or_default() += 1;
        }
        let (wax_id, wins) = wins_per_wax.into_iter().max_by_key(|(_, wins)| *wins)?;

        let confidence = wins as f64 / support as f64;
        if confidence < CONFIDENCE_THRESHOLD {
            tracing::debug!(
                %wax_id,
                confidence,
                threshold = CONFIDENCE_THRESHOLD,
                "Best wax under these conditions is below the confidence threshold"
            );
            return None;
        }

        Some(Recommendation {
            wax_id,
            support,
            confidence,
        })
    }
}
