//! Derived, non-persisted aggregates

use serde::Serialize;

use super::money::Money;

/// Totals over all transactions plus the same totals for the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub monthly_balance: Money,
}

impl FinancialSummary {
    /// Build a summary; balances are always derived from income and expenses
    pub fn new(
        total_income: Money,
        total_expenses: Money,
        monthly_income: Money,
        monthly_expenses: Money,
    ) -> Self {
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            monthly_income,
            monthly_expenses,
            monthly_balance: monthly_income - monthly_expenses,
        }
    }

    /// Share of this month's income that was kept, as a percentage
    ///
    /// Zero when there was no income this month.
    pub fn savings_rate(&self) -> f64 {
        if !self.monthly_income.is_positive() {
            return 0.0;
        }
        self.monthly_balance.percentage_of(self.monthly_income)
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub count: usize,
}
