//! Wax recommendation scaffold.
//!
//! Turns historical test sessions into feature vectors, splits them into
//! reproducible train/validation/test partitions, and exposes a gated
//! recommender interface. The deterministic pieces (encoding, splitting,
//! gating) are implemented; the learned model behind [`recommend::WaxRecommender`]
//! is future work, with a condition-frequency baseline standing in.

pub mod dataset;
pub mod features;
pub mod recommend;
