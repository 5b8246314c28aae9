//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::category::{is_known_category, normalize_category};
use crate::models::{Money, NewTransaction, TransactionId, TransactionType};
use crate::services::FinanceStore;
use crate::storage::KeyValueStore;

use super::report_persisted;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Short title, e.g. "Coffee"
        title: String,
        /// Amount, e.g. 5 or 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Optional longer description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every transaction
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },
    /// Show one transaction
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    finance: &mut FinanceStore<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                FinanceError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;

            let kind = TransactionType::parse(&kind).ok_or_else(|| {
                FinanceError::Validation(format!(
                    "Invalid type '{}'. Use 'income' or 'expense'",
                    kind
                ))
            })?;

            let date = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    FinanceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", d))
                })?,
                None => Local::now().date_naive(),
            };

            let mut input = NewTransaction::new(
                title.trim(),
                amount,
                normalize_category(&category),
                kind,
                date,
            );
            if let Some(description) = description {
                input = input.with_description(description);
            }

            input
                .validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;

            if !is_known_category(&input.category) {
                println!("Note: '{}' is not a known category", input.category);
            }

            let added = finance.add_transaction(input);
            report_persisted(&added);

            println!(
                "Added {}: {} ({})",
                added.value.kind,
                added.value.title,
                added.value.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", added.value.id);
        }

        TransactionCommands::List { limit, all } => {
            let limit = if all {
                usize::MAX
            } else {
                limit.unwrap_or(settings.recent_limit)
            };

            let recent = finance.recent_transactions(limit);
            print!(
                "{}",
                format_transaction_list(&recent, symbol, &settings.date_format)
            );

            let total = finance.transactions().len();
            if recent.len() < total {
                println!("\nShowing {} of {} transactions", recent.len(), total);
            }
        }

        TransactionCommands::Show { id } => {
            let id = TransactionId::from(id.as_str());
            let txn = finance
                .transaction(&id)
                .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;

            print!(
                "{}",
                format_transaction_details(txn, symbol, &settings.date_format)
            );
        }

        TransactionCommands::Delete { id } => {
            let id = TransactionId::from(id.as_str());
            let removed = finance.delete_transaction(&id);
            report_persisted(&removed);

            if removed.value == 0 {
                println!("No transaction with ID {}", id);
            } else {
                println!("Deleted transaction {}", id);
            }
        }
    }

    Ok(())
}
