//! Service layer for the finance tracker
//!
//! `summary` holds the pure aggregations; `finance_store` owns the state
//! and keeps it in sync with a key-value store.

pub mod finance_store;
pub mod summary;

pub use finance_store::{FinanceStore, Persisted};
