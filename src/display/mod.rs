//! Display formatting for terminal output
//!
//! Plain-text tables for transactions, budgets, summaries and spending.
//! Every formatter takes the currency symbol from settings.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_row};
pub use report::{format_spending, format_summary};
pub use transaction::{format_transaction_details, format_transaction_list, format_transaction_row};
