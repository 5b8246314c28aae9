//! Finance Tracker - personal finance aggregation and persistence
//!
//! Records income and expense transactions, per-category budgets and a
//! display preference, derives overall and current-month totals, and keeps
//! everything in a string-keyed store of JSON values.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Diagnostic subscriber setup
//! - `models`: Core data models (transactions, budgets, money, summaries)
//! - `storage`: Key-value store trait, its in-memory and file backends, sample data
//! - `services`: The finance store and pure aggregations
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting
//! - `cli`: Command handlers for the `finance` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::models::{Money, NewTransaction, TransactionType};
//! use finance_tracker::services::FinanceStore;
//! use finance_tracker::storage::MemoryStore;
//!
//! let mut finance = FinanceStore::open(MemoryStore::new())?;
//! let coffee = NewTransaction::new(
//!     "Coffee",
//!     Money::from_units(5),
//!     "Food & Dining",
//!     TransactionType::Expense,
//!     chrono::Local::now().date_naive(),
//! );
//! finance.add_transaction(coffee).into_result()?;
//! println!("{}", finance.financial_summary().balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
pub use services::{FinanceStore, Persisted};
