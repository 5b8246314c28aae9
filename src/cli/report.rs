//! Summary, spending, category, theme and history commands

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{format_spending, format_summary};
use crate::error::FinanceResult;
use crate::models::category::budget_categories;
use crate::models::CATEGORIES;
use crate::services::FinanceStore;
use crate::storage::KeyValueStore;

use super::report_persisted;

/// Print overall and current-month totals
pub fn handle_summary<S: KeyValueStore>(finance: &FinanceStore<S>, settings: &Settings) {
    print!(
        "{}",
        format_summary(&finance.financial_summary(), &settings.currency_symbol)
    );
}

/// Print expense totals per category
pub fn handle_spending<S: KeyValueStore>(finance: &FinanceStore<S>, settings: &Settings) {
    print!(
        "{}",
        format_spending(&finance.spending_by_category(), &settings.currency_symbol)
    );
}

/// Print the category catalogue
pub fn handle_categories() {
    println!("{:20} {:8} {}", "Category", "Colour", "Budgetable");
    println!("{}", "-".repeat(40));

    for info in CATEGORIES.iter() {
        let budgetable = budget_categories().any(|name| name == info.name);
        println!(
            "{:20} {:8} {}",
            info.name,
            info.color,
            if budgetable { "yes" } else { "no" }
        );
    }
}

/// Flip dark mode and print the new setting
pub fn handle_theme<S: KeyValueStore>(finance: &mut FinanceStore<S>) {
    let toggled = finance.toggle_dark_mode();
    report_persisted(&toggled);

    println!("Dark mode: {}", if toggled.value { "on" } else { "off" });
}

/// Print the most recent audit entries, oldest first
pub fn handle_history(logger: &AuditLogger, limit: usize) -> FinanceResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
