//! First-run sample data
//!
//! A fixed dataset written on first launch so the tracker never starts
//! empty. The rows are literal: same IDs, dates and amounts on every call.

use chrono::NaiveDate;

use crate::models::{
    Budget, BudgetId, BudgetPeriod, Money, Transaction, TransactionId, TransactionType,
};

fn seed_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

fn seed_transaction(
    id: &str,
    title: &str,
    amount: i64,
    category: &str,
    kind: TransactionType,
    day: u32,
    description: &str,
) -> Transaction {
    Transaction {
        id: TransactionId::from(id),
        title: title.to_string(),
        amount: Money::from_units(amount),
        category: category.to_string(),
        kind,
        date: seed_date(day),
        description: Some(description.to_string()),
    }
}

fn seed_budget(id: &str, category: &str, amount: i64, spent: i64) -> Budget {
    Budget {
        id: BudgetId::from(id),
        category: category.to_string(),
        amount: Money::from_units(amount),
        spent: Money::from_units(spent),
        period: BudgetPeriod::Monthly,
    }
}

/// The five sample transactions: one salary and four expenses, January 2024
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    vec![
        seed_transaction("1", "Salary", 5000, "Income", Income, 1, "Monthly salary"),
        seed_transaction(
            "2",
            "Grocery Shopping",
            150,
            "Food & Dining",
            Expense,
            2,
            "Weekly groceries",
        ),
        seed_transaction("3", "Gas Station", 60, "Transportation", Expense, 3, "Fuel for car"),
        seed_transaction("4", "Movie Tickets", 25, "Entertainment", Expense, 4, "Weekend movie"),
        seed_transaction(
            "5",
            "Electricity Bill",
            120,
            "Bills & Utilities",
            Expense,
            5,
            "Monthly electricity",
        ),
    ]
}

/// The four sample budgets, one per sample expense category
///
/// Each `spent` equals the matching sample expense.
pub fn sample_budgets() -> Vec<Budget> {
    vec![
        seed_budget("1", "Food & Dining", 500, 150),
        seed_budget("2", "Transportation", 200, 60),
        seed_budget("3", "Entertainment", 100, 25),
        seed_budget("4", "Bills & Utilities", 300, 120),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::summary::spent_for_category;

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample_transactions(), sample_transactions());
        assert_eq!(sample_budgets(), sample_budgets());
    }

    #[test]
    fn test_sample_transactions() {
        let txns = sample_transactions();
        assert_eq!(txns.len(), 5);

        let ids: Vec<_> = txns.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);

        let incomes: Vec<_> = txns.iter().filter(|t| t.is_income()).collect();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].amount, Money::from_units(5000));
        assert_eq!(incomes[0].category, "Income");

        let expense_total: Money = txns.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();
        assert_eq!(expense_total, Money::from_units(355));

        assert!(txns.iter().all(|t| t.is_in_month(2024, 1)));
    }

    #[test]
    fn test_sample_budgets_match_sample_spending() {
        let txns = sample_transactions();
        let budgets = sample_budgets();
        assert_eq!(budgets.len(), 4);

        for budget in &budgets {
            assert_eq!(budget.spent, spent_for_category(&txns, &budget.category));
            assert_eq!(budget.period, BudgetPeriod::Monthly);
        }
    }

    #[test]
    fn test_sample_wire_format() {
        let json = serde_json::to_value(&sample_transactions()[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "2",
                "title": "Grocery Shopping",
                "amount": 150,
                "category": "Food & Dining",
                "type": "expense",
                "date": "2024-01-02",
                "description": "Weekly groceries"
            })
        );
    }
}
