//! Ski model entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlab_core::types::{DbId, Timestamp};

/// A row from the `ski_models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkiModel {
    pub id: DbId,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    /// Free-text label, e.g. "classic", "skate", "racing".
    pub category: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new ski model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkiModel {
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing ski model. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkiModel {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub notes: Option<String>,
}
