//! Shared domain types, error taxonomy, and validation rules for waxlab.
//!
//! This crate is dependency-light on purpose: everything here is pure and
//! synchronous so the database and prediction layers can validate inputs
//! without touching a connection.

pub mod catalog;
pub mod conditions;
pub mod error;
pub mod glide_test;
pub mod types;
