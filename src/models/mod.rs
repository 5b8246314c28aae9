//! Core data models for the finance tracker
//!
//! This module contains the data structures of the tracking domain:
//! transactions, category budgets, the category catalogue and the derived
//! financial summary.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;

pub use budget::{Budget, BudgetPeriod, BudgetStatus, NewBudget};
pub use category::{CategoryInfo, CATEGORIES};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use summary::{CategorySpending, FinancialSummary};
pub use transaction::{NewTransaction, Transaction, TransactionType};
