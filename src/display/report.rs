//! Summary and spending report formatting

use crate::models::{CategorySpending, FinancialSummary, Money};

use super::transaction::truncate;

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the overall and current-month totals
pub fn format_summary(summary: &FinancialSummary, symbol: &str) -> String {
    let line = |label: &str, amount: Money| {
        format!("{:18} {:>14}\n", label, amount.format_with_symbol(symbol))
    };

    let mut output = String::new();
    output.push_str("All time\n");
    output.push_str(&line("  Income", summary.total_income));
    output.push_str(&line("  Expenses", summary.total_expenses));
    output.push_str(&line("  Balance", summary.balance));
    output.push('\n');
    output.push_str("This month\n");
    output.push_str(&line("  Income", summary.monthly_income));
    output.push_str(&line("  Expenses", summary.monthly_expenses));
    output.push_str(&line("  Balance", summary.monthly_balance));
    output.push_str(&format!(
        "{:18} {:>14}\n",
        "  Savings rate",
        format_percentage(summary.savings_rate())
    ));

    output
}

/// Format expense totals per category with a bar relative to the largest
pub fn format_spending(spending: &[CategorySpending], symbol: &str) -> String {
    if spending.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = spending
        .iter()
        .map(|s| s.total.as_f64())
        .fold(0.0_f64, f64::max);
    let total: Money = spending.iter().map(|s| s.total).sum();

    let mut output = String::new();
    for row in spending {
        output.push_str(&format!(
            "{:18} {:>12} {:>5} {}\n",
            truncate(&row.category, 18),
            row.total.format_with_symbol(symbol),
            format_percentage(row.total.percentage_of(total)),
            format_bar(row.total.as_f64(), max, BAR_WIDTH)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::summary::{compute_summary, spending_by_category};
    use crate::storage::sample::sample_transactions;
    use chrono::NaiveDate;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(7.34), "7.3%");
        assert_eq!(format_percentage(92.9), "93%");
        assert_eq!(format_percentage(-50.0), "-50%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(20.0, 10.0, 4), "████");
        assert_eq!(format_bar(0.0, 10.0, 3), "░░░");
    }

    #[test]
    fn test_format_summary() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let summary = compute_summary(&sample_transactions(), today);

        let output = format_summary(&summary, "$");
        assert!(output.contains("$5000.00"));
        assert!(output.contains("$355.00"));
        assert!(output.contains("$4645.00"));
        assert!(output.contains("93%"));
    }

    #[test]
    fn test_format_spending() {
        let spending = spending_by_category(&sample_transactions());
        let output = format_spending(&spending, "$");

        let first = output.lines().next().unwrap();
        assert!(first.starts_with("Food & Dining"));
        assert!(first.contains("$150.00"));
        assert!(first.ends_with(&"█".repeat(BAR_WIDTH)));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_format_spending_empty() {
        assert_eq!(format_spending(&[], "$"), "No expenses recorded.\n");
    }
}
