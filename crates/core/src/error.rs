use crate::types::DbId;

/// Error taxonomy shared across the workspace.
///
/// `Validation` and `ReferentialIntegrity` are caller-recoverable and are
/// raised before (or atomically with) persistence; `Configuration` is fatal
/// at startup.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Referential integrity violation on {entity}: {detail}")]
    ReferentialIntegrity { entity: &'static str, detail: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
