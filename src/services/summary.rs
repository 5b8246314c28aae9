//! Pure aggregation over a transaction list
//!
//! Nothing here reads the clock or touches storage: "today" is always an
//! argument, so the same inputs give the same outputs.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{CategorySpending, FinancialSummary, Money, Transaction, TransactionType};

/// Sum of amounts of the given type
pub fn total_of(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Sum of amounts of the given type dated in the calendar month of `today`
pub fn monthly_total_of(
    transactions: &[Transaction],
    kind: TransactionType,
    today: NaiveDate,
) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind && t.is_in_month(today.year(), today.month()))
        .map(|t| t.amount)
        .sum()
}

/// Overall and current-month totals as seen on `today`
pub fn compute_summary(transactions: &[Transaction], today: NaiveDate) -> FinancialSummary {
    FinancialSummary::new(
        total_of(transactions, TransactionType::Income),
        total_of(transactions, TransactionType::Expense),
        monthly_total_of(transactions, TransactionType::Income, today),
        monthly_total_of(transactions, TransactionType::Expense, today),
    )
}

/// Total of expenses whose category equals `category` exactly
pub fn spent_for_category(transactions: &[Transaction], category: &str) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .map(|t| t.amount)
        .sum()
}

/// Expense totals per category, largest first
///
/// Ties are broken by category name so the order is stable.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let entry = by_category
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut spending: Vec<_> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategorySpending {
            category: category.to_string(),
            total,
            count,
        })
        .collect();

    spending.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    spending
}

/// Transactions ordered newest date first, at most `limit` of them
///
/// Transactions sharing a date keep their insertion order.
pub fn most_recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<_> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
