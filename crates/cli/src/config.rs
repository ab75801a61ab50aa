use waxlab_core::error::CoreError;

/// Read the database connection string from the environment.
///
/// A missing `DATABASE_URL` is a fatal configuration error; there is no
/// default to fall back to.
pub fn database_url() -> Result<String, CoreError> {
    std::env::var("DATABASE_URL").map_err(|_| {
        CoreError::Configuration(
            "DATABASE_URL environment variable not set. \
             Create a .env file with DATABASE_URL (see .env.example)"
                .to_string(),
        )
    })
}
