//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_list;
use crate::error::{FinanceError, FinanceResult};
use crate::models::category::normalize_category;
use crate::models::{BudgetPeriod, Money, NewBudget};
use crate::services::FinanceStore;
use crate::storage::KeyValueStore;

use super::report_persisted;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Declare a spending limit for a category
    Add {
        /// Category name
        category: String,
        /// Limit, e.g. 500
        amount: String,
        /// weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },
    /// List budgets with usage
    List,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    finance: &mut FinanceStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Add {
            category,
            amount,
            period,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                FinanceError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;

            let period = BudgetPeriod::parse(&period).ok_or_else(|| {
                FinanceError::Validation(format!(
                    "Invalid period '{}'. Use weekly, monthly or yearly",
                    period
                ))
            })?;

            let input = NewBudget::new(normalize_category(&category), amount, period);
            input
                .validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;

            let added = finance.add_budget(input);
            report_persisted(&added);

            let budget = &added.value;
            println!(
                "Added {} budget for {}: {} (already spent {})",
                budget.period,
                budget.category,
                budget.amount.format_with_symbol(symbol),
                budget.spent.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let rows: Vec<_> = finance
                .budgets()
                .iter()
                .map(|b| (b, finance.live_spent(b)))
                .collect();

            print!("{}", format_budget_list(&rows, symbol));
        }
    }

    Ok(())
}
