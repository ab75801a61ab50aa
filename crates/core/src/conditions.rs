//! Snow and weather condition vocabulary.
//!
//! `snow_type` is a closed set enforced both here and by a schema CHECK.
//! The remaining condition fields are free text in the database; their
//! label lists below are the known vocabulary used by feature encoding,
//! with anything else falling into an "other" bucket.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The closed set of snow types a test session may record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnowType {
    New,
    Old,
    Transformed,
    Artificial,
    Mixed,
}

impl SnowType {
    /// All variants, in the order they appear in feature encodings.
    pub const ALL: [SnowType; 5] = [
        SnowType::New,
        SnowType::Old,
        SnowType::Transformed,
        SnowType::Artificial,
        SnowType::Mixed,
    ];

    /// Return the database string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Old => "old",
            Self::Transformed => "transformed",
            Self::Artificial => "artificial",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for SnowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnowType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "old" => Ok(Self::Old),
            "transformed" => Ok(Self::Transformed),
            "artificial" => Ok(Self::Artificial),
            "mixed" => Ok(Self::Mixed),
            other => Err(CoreError::Validation(format!(
                "snow_type must be one of new, old, transformed, artificial, mixed; got '{other}'"
            ))),
        }
    }
}

/// Known snow moisture labels.
pub const SNOW_MOISTURE_LABELS: [&str; 3] = ["dry", "moist", "wet"];

/// Known track condition labels.
pub const TRACK_CONDITION_LABELS: [&str; 4] = ["soft", "firm", "icy", "variable"];

/// Known precipitation labels.
pub const PRECIPITATION_LABELS: [&str; 5] = ["none", "light snow", "heavy snow", "rain", "mixed"];

/// Known course profile labels.
pub const COURSE_PROFILE_LABELS: [&str; 4] = ["flat", "slight_incline", "downhill", "varied"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snow_type_round_trips_through_strings() {
        for variant in SnowType::ALL {
            assert_eq!(variant.as_str().parse::<SnowType>().unwrap(), variant);
        }
    }

    #[test]
    fn unknown_snow_type_rejected() {
        let err = "slush".parse::<SnowType>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn snow_type_display_matches_as_str() {
        assert_eq!(SnowType::Transformed.to_string(), "transformed");
    }
}
