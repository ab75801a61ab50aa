/// Surrogate primary key type; every table uses PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps (test dates, row creation/update times) are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
