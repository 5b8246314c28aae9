//! Budget model
//!
//! A budget is a spending limit for one category. `spent` is a snapshot
//! taken when the budget is created and is never updated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Usage at or above this percentage is a warning
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Usage at or above this percentage is a danger
pub const DANGER_THRESHOLD: f64 = 90.0;

/// The period a budget covers (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// Parse a period from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// How close a budget is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Under 75% used
    Good,
    /// 75% up to 90% used
    Warning,
    /// 90% or more used
    Danger,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// A category budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget limits
    pub category: String,

    /// The limit
    pub amount: Money,

    /// Expenses in the category at the moment the budget was created
    pub spent: Money,

    /// Period label
    pub period: BudgetPeriod,
}

impl Budget {
    /// Percentage of the limit already spent
    ///
    /// A zero limit reads as fully used once anything is spent.
    pub fn percentage_used(&self) -> f64 {
        if self.amount.is_zero() {
            return if self.spent.is_positive() { 100.0 } else { 0.0 };
        }
        self.spent.percentage_of(self.amount)
    }

    /// Amount left before the limit; negative once overspent
    pub fn remaining(&self) -> Money {
        self.amount - self.spent
    }

    /// Check if more has been spent than the limit allows
    pub fn is_overspent(&self) -> bool {
        self.spent > self.amount
    }

    /// Classify usage against the warning and danger thresholds
    pub fn status(&self) -> BudgetStatus {
        let pct = self.percentage_used();
        if pct >= DANGER_THRESHOLD {
            BudgetStatus::Danger
        } else if pct >= WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} / {}",
            self.category, self.period, self.spent, self.amount
        )
    }
}

/// Input for declaring a budget: every field except the ID and `spent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub amount: Money,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, amount: Money, period: BudgetPeriod) -> Self {
        Self {
            category: category.into(),
            amount,
            period,
        }
    }

    /// Presence checks only
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Materialize the budget with its ID and spent snapshot
    pub fn into_budget(self, id: BudgetId, spent: Money) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            spent,
            period: self.period,
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    NonPositiveAmount(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Budget category is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
