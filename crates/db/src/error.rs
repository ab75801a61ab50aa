//! Database error type and sqlx error mapping.

use sqlx::error::ErrorKind;
use waxlab_core::error::CoreError;

/// Error returned by repository operations.
///
/// Domain failures (validation, dangling references, lookup misses) are
/// carried as [`CoreError`]; everything else passes through as the raw
/// driver error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// Map an error from a write statement into the domain taxonomy.
    ///
    /// Foreign key violations become `ReferentialIntegrity` (a dangling
    /// catalog reference on insert, or a blocked delete of a referenced
    /// catalog row). Check violations become `Validation` carrying the
    /// offending constraint name; these fire when a partial update would
    /// break a cross-field invariant the in-process checks could not see.
    pub(crate) fn on_write(entity: &'static str, err: sqlx::Error) -> DbError {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation => {
                    return DbError::Core(CoreError::ReferentialIntegrity {
                        entity,
                        detail: db_err
                            .constraint()
                            .map_or_else(|| db_err.message().to_string(), str::to_string),
                    });
                }
                ErrorKind::CheckViolation => {
                    return DbError::Core(CoreError::Validation(format!(
                        "{entity} violates constraint {}",
                        db_err.constraint().unwrap_or("unknown")
                    )));
                }
                _ => {}
            }
        }
        DbError::Sqlx(err)
    }

    /// Convenience constructor for lookup misses.
    pub(crate) fn not_found(entity: &'static str, id: waxlab_core::types::DbId) -> DbError {
        DbError::Core(CoreError::NotFound { entity, id })
    }
}
