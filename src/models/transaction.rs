//! Transaction model
//!
//! A transaction is a single income or expense. The amount is always stored
//! as a magnitude; its sign comes from the transaction type.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received
    Income,
    /// Money spent
    Expense,
}

impl TransactionType {
    /// Parse a transaction type from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Short free-text title
    pub title: String,

    /// Magnitude of the transaction
    pub amount: Money,

    /// Category name (soft reference into the category catalogue)
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Calendar date, `YYYY-MM-DD` on the wire
    pub date: NaiveDate,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The amount with the sign implied by the type (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Check if the transaction falls in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

/// Input for recording a new transaction: every field except the ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Money,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewTransaction {
    /// Create an input with no description
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category: category.into(),
            kind,
            date,
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Presence checks only; the category is not matched against the catalogue
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::MissingTitle);
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }

    /// Materialize the transaction under the given ID
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            kind: self.kind,
            date: self.date,
            description: self.description,
        }
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingTitle,
    MissingCategory,
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Transaction title is required"),
            Self::MissingCategory => write!(f, "Transaction category is required"),
            Self::NegativeAmount(amount) => write!(
                f,
                "Transaction amount must not be negative (got {}); use the type for direction",
                amount
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn coffee() -> NewTransaction {
        NewTransaction::new(
            "Coffee",
            Money::from_units(5),
            "Food & Dining",
            TransactionType::Expense,
            date(2025, 3, 14),
        )
    }

    #[test]
    fn test_wire_format_matches_persisted_payload() {
        let txn = coffee()
            .with_description("Flat white")
            .into_transaction(TransactionId::from("7"));

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "7",
                "title": "Coffee",
                "amount": 5,
                "category": "Food & Dining",
                "type": "expense",
                "date": "2025-03-14",
                "description": "Flat white"
            })
        );
    }

    #[test]
    fn test_description_is_optional() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id":"9","title":"Bonus","amount":250.75,"category":"Income","type":"income","date":"2024-12-20"}"#,
        )
        .unwrap();

        assert_eq!(txn.description, None);
        assert_eq!(txn.amount.cents(), 25075);
        assert!(txn.is_income());
        assert!(!serde_json::to_string(&txn).unwrap().contains("description"));
    }

    #[test]
    fn test_signed_amount() {
        let expense = coffee().into_transaction(TransactionId::generate());
        assert_eq!(expense.signed_amount(), Money::from_units(-5));

        let mut income = expense.clone();
        income.kind = TransactionType::Income;
        assert_eq!(income.signed_amount(), Money::from_units(5));
    }

    #[test]
    fn test_is_in_month() {
        let txn = coffee().into_transaction(TransactionId::generate());
        assert!(txn.is_in_month(2025, 3));
        assert!(!txn.is_in_month(2025, 4));
        assert!(!txn.is_in_month(2024, 3));
    }

    #[test]
    fn test_validation() {
        assert!(coffee().validate().is_ok());

        let mut missing_title = coffee();
        missing_title.title = "  ".into();
        assert_eq!(
            missing_title.validate(),
            Err(TransactionValidationError::MissingTitle)
        );

        let mut missing_category = coffee();
        missing_category.category = String::new();
        assert_eq!(
            missing_category.validate(),
            Err(TransactionValidationError::MissingCategory)
        );

        let mut negative = coffee();
        negative.amount = Money::from_units(-5);
        assert!(matches!(
            negative.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let mut txn = coffee();
        txn.category = "Pets".into();
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_type_parse() {
        assert_eq!(TransactionType::parse("Income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("out"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("transfer"), None);
    }

    #[test]
    fn test_display() {
        let txn = coffee().into_transaction(TransactionId::from("1"));
        assert_eq!(format!("{}", txn), "2025-03-14 Coffee -$5.00");
    }
}
