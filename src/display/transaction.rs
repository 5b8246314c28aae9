//! Transaction display formatting

use crate::models::Transaction;

/// Format a single transaction as a list row
///
/// Expenses are shown negative; the ID comes last so it can be copied for
/// `transaction delete`.
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    format!(
        "{:10} {:24} {:18} {:>12}  {}",
        txn.date.format(date_format),
        truncate(&txn.title, 24),
        truncate(&txn.category, 18),
        txn.signed_amount().format_with_symbol(symbol),
        txn.id
    )
}

/// Format transactions as a table
pub fn format_transaction_list(
    transactions: &[&Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:18} {:>12}  {}\n",
        "Date", "Title", "Category", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if let Some(description) = txn.description.as_deref().filter(|d| !d.is_empty()) {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}

/// Pad or cut a string to exactly `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample::sample_transactions;

    #[test]
    fn test_row_shows_signed_amount_and_id() {
        let txns = sample_transactions();

        let salary = format_transaction_row(&txns[0], "$", "%Y-%m-%d");
        assert!(salary.starts_with("2024-01-01 Salary"));
        assert!(salary.contains("$5000.00"));
        assert!(salary.ends_with(" 1"));

        let groceries = format_transaction_row(&txns[1], "$", "%Y-%m-%d");
        assert!(groceries.contains("-$150.00"));
    }

    #[test]
    fn test_list() {
        let txns = sample_transactions();
        let refs: Vec<_> = txns.iter().collect();

        let output = format_transaction_list(&refs, "$", "%d/%m/%Y");
        assert!(output.starts_with("Date"));
        assert!(output.contains("05/01/2024"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_list(&[], "$", "%Y-%m-%d"), "No transactions found.\n");
    }

    #[test]
    fn test_details() {
        let txns = sample_transactions();
        let output = format_transaction_details(&txns[2], "€", "%Y-%m-%d");

        assert!(output.contains("Title:       Gas Station"));
        assert!(output.contains("Amount:      €60.00"));
        assert!(output.contains("Type:        expense"));
        assert!(output.contains("Description: Fuel for car"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("Bills & Utilities", 10), "Bills &...");
        assert_eq!(truncate("Café au lait crème", 8), "Café ...");
    }
}
