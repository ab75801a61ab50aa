//! Repository for the `wax_products` table.

use sqlx::PgExecutor;
use waxlab_core::catalog;
use waxlab_core::types::DbId;

use crate::error::DbError;
use crate::models::wax_product::{CreateWaxProduct, UpdateWaxProduct, WaxProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, brand, product_name, wax_type, temp_range_low, temp_range_high, \
    color_code, application_method, notes, created_at";

const ENTITY: &str = "wax_product";

/// Provides CRUD operations for wax products.
pub struct WaxProductRepo;

impl WaxProductRepo {
    /// Insert a new wax product, returning the created row.
    ///
    /// Fails with a validation error if a required text field is empty or
    /// the temperature range is inverted.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateWaxProduct,
    ) -> Result<WaxProduct, DbError> {
        catalog::validate_required_text(&input.brand, "brand")?;
        catalog::validate_required_text(&input.product_name, "product_name")?;
        catalog::validate_required_text(&input.wax_type, "wax_type")?;
        catalog::validate_temp_range(input.temp_range_low, input.temp_range_high)?;

        let query = format!(
            "INSERT INTO wax_products
                (brand, product_name, wax_type, temp_range_low, temp_range_high,
                 color_code, application_method, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaxProduct>(&query)
            .bind(&input.brand)
            .bind(&input.product_name)
            .bind(&input.wax_type)
            .bind(input.temp_range_low)
            .bind(input.temp_range_high)
            .bind(&input.color_code)
            .bind(&input.application_method)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))
    }

    /// Find a wax product by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<WaxProduct>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM wax_products WHERE id = $1");
        sqlx::query_as::<_, WaxProduct>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(DbError::from)
    }

    /// Fetch a wax product by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(executor: impl PgExecutor<'_>, id: DbId) -> Result<WaxProduct, DbError> {
        Self::find_by_id(executor, id)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// List all wax products, newest first.
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<WaxProduct>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM wax_products ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, WaxProduct>(&query)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// List wax products of one brand, newest first.
    pub async fn list_by_brand(
        executor: impl PgExecutor<'_>,
        brand: &str,
    ) -> Result<Vec<WaxProduct>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM wax_products
             WHERE brand = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, WaxProduct>(&query)
            .bind(brand)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// Update a wax product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. An inverted
    /// temperature range produced by a partial patch is rejected by the
    /// schema CHECK and surfaced as a validation error.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateWaxProduct,
    ) -> Result<Option<WaxProduct>, DbError> {
        if let Some(ref brand) = input.brand {
            catalog::validate_required_text(brand, "brand")?;
        }
        if let Some(ref product_name) = input.product_name {
            catalog::validate_required_text(product_name, "product_name")?;
        }
        if let Some(ref wax_type) = input.wax_type {
            catalog::validate_required_text(wax_type, "wax_type")?;
        }
        catalog::validate_temp_range(input.temp_range_low, input.temp_range_high)?;

        let query = format!(
            "UPDATE wax_products SET
                brand = COALESCE($2, brand),
                product_name = COALESCE($3, product_name),
                wax_type = COALESCE($4, wax_type),
                temp_range_low = COALESCE($5, temp_range_low),
                temp_range_high = COALESCE($6, temp_range_high),
                color_code = COALESCE($7, color_code),
                application_method = COALESCE($8, application_method),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaxProduct>(&query)
            .bind(id)
            .bind(&input.brand)
            .bind(&input.product_name)
            .bind(&input.wax_type)
            .bind(input.temp_range_low)
            .bind(input.temp_range_high)
            .bind(&input.color_code)
            .bind(&input.application_method)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))
    }

    /// Delete a wax product by ID. Returns `true` if a row was removed.
    ///
    /// Fails with `ReferentialIntegrity` while any test session still
    /// references the wax (no silent cascade).
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM wax_products WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }
}
