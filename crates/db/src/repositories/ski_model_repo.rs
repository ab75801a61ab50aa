//! Repository for the `ski_models` table.

use sqlx::PgExecutor;
use waxlab_core::catalog;
use waxlab_core::types::DbId;

use crate::error::DbError;
use crate::models::ski_model::{CreateSkiModel, SkiModel, UpdateSkiModel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, brand, model, year, category, notes, created_at";

const ENTITY: &str = "ski_model";

/// Provides CRUD operations for ski models.
pub struct SkiModelRepo;

impl SkiModelRepo {
    /// Insert a new ski model, returning the created row.
    ///
    /// Fails with a validation error if `brand` or `model` is empty or
    /// `year` is non-positive.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateSkiModel,
    ) -> Result<SkiModel, DbError> {
        catalog::validate_required_text(&input.brand, "brand")?;
        catalog::validate_required_text(&input.model, "model")?;
        catalog::validate_model_year(input.year)?;

        let query = format!(
            "INSERT INTO ski_models (brand, model, year, category, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkiModel>(&query)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.category)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))
    }

    /// Find a ski model by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<SkiModel>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM ski_models WHERE id = $1");
        sqlx::query_as::<_, SkiModel>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(DbError::from)
    }

    /// Fetch a ski model by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(executor: impl PgExecutor<'_>, id: DbId) -> Result<SkiModel, DbError> {
        Self::find_by_id(executor, id)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// List all ski models, newest first.
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<SkiModel>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM ski_models ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, SkiModel>(&query)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// List ski models of one brand, newest first.
    pub async fn list_by_brand(
        executor: impl PgExecutor<'_>,
        brand: &str,
    ) -> Result<Vec<SkiModel>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM ski_models
             WHERE brand = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, SkiModel>(&query)
            .bind(brand)
            .fetch_all(executor)
            .await
            .map_err(DbError::from)
    }

    /// Update a ski model. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateSkiModel,
    ) -> Result<Option<SkiModel>, DbError> {
        if let Some(ref brand) = input.brand {
            catalog::validate_required_text(brand, "brand")?;
        }
        if let Some(ref model) = input.model {
            catalog::validate_required_text(model, "model")?;
        }
        catalog::validate_model_year(input.year)?;

        let query = format!(
            "UPDATE ski_models SET
                brand = COALESCE($2, brand),
                model = COALESCE($3, model),
                year = COALESCE($4, year),
                category = COALESCE($5, category),
                notes = COALESCE($6, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkiModel>(&query)
            .bind(id)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.category)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))
    }

    /// Delete a ski model by ID. Returns `true` if a row was removed.
    ///
    /// Fails with `ReferentialIntegrity` while any test session still
    /// references the ski (no silent cascade).
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM ski_models WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| DbError::on_write(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }
}
