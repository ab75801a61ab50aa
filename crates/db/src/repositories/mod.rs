//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any `PgExecutor` so callers can run them against the pool
//! directly or inside an open transaction (unit of work).

pub mod ski_model_repo;
pub mod test_session_repo;
pub mod wax_product_repo;

pub use ski_model_repo::SkiModelRepo;
pub use test_session_repo::TestSessionRepo;
pub use wax_product_repo::WaxProductRepo;
