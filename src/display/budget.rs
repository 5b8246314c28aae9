//! Budget display formatting

use crate::models::{Budget, BudgetStatus, Money};

use super::report::{format_bar, format_percentage};
use super::transaction::truncate;

const BAR_WIDTH: usize = 12;

fn status_icon(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => "✓",
        BudgetStatus::Warning => "!",
        BudgetStatus::Danger => "✗",
    }
}

/// Format one budget as a row
///
/// `live_spent` is what the category has spent right now. It is shown next
/// to the stored figure only when the two differ.
pub fn format_budget_row(budget: &Budget, live_spent: Money, symbol: &str) -> String {
    let mut row = format!(
        "{} {:18} {:8} {:>11} / {:>11} {:>11} {:>5} {}",
        status_icon(budget.status()),
        truncate(&budget.category, 18),
        budget.period.to_string(),
        budget.spent.format_with_symbol(symbol),
        budget.amount.format_with_symbol(symbol),
        budget.remaining().format_with_symbol(symbol),
        format_percentage(budget.percentage_used()),
        format_bar(budget.spent.as_f64(), budget.amount.as_f64(), BAR_WIDTH)
    );

    if live_spent != budget.spent {
        row.push_str(&format!(" (now {})", live_spent.format_with_symbol(symbol)));
    }

    row
}

/// Format budgets paired with their current spending as a table
pub fn format_budget_list(budgets: &[(&Budget, Money)], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets defined.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:18} {:8} {:>11}   {:>11} {:>11} {:>5}\n",
        "Category", "Period", "Spent", "Limit", "Left", "Used"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for (budget, live_spent) in budgets {
        output.push_str(&format_budget_row(budget, *live_spent, symbol));
        output.push('\n');
    }

    output
}
