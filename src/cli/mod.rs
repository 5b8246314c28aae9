//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the finance store.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{
    handle_categories, handle_history, handle_spending, handle_summary, handle_theme,
};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::services::Persisted;

/// Tell the user when a change was applied but could not be saved
pub(crate) fn report_persisted<T>(result: &Persisted<T>) {
    if let Some(warning) = &result.warning {
        eprintln!("Warning: change applied but not saved: {}", warning);
    }
}
