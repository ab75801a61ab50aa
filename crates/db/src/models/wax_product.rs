//! Wax product entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlab_core::types::{DbId, Timestamp};

/// A row from the `wax_products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaxProduct {
    pub id: DbId,
    pub brand: String,
    pub product_name: String,
    /// e.g. "glide", "kick", "universal".
    pub wax_type: String,
    /// Recommended range in degrees Celsius; when both ends are present,
    /// low <= high.
    pub temp_range_low: Option<f64>,
    pub temp_range_high: Option<f64>,
    pub color_code: Option<String>,
    /// e.g. "hot wax", "rub-on".
    pub application_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new wax product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWaxProduct {
    pub brand: String,
    pub product_name: String,
    pub wax_type: String,
    pub temp_range_low: Option<f64>,
    pub temp_range_high: Option<f64>,
    pub color_code: Option<String>,
    pub application_method: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing wax product. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWaxProduct {
    pub brand: Option<String>,
    pub product_name: Option<String>,
    pub wax_type: Option<String>,
    pub temp_range_low: Option<f64>,
    pub temp_range_high: Option<f64>,
    pub color_code: Option<String>,
    pub application_method: Option<String>,
    pub notes: Option<String>,
}
