//! Expense display formatting
//!
//! Formats expenses for terminal output in table and summary views.

use crate::models::Expense;
use crate::services::SummaryReport;

/// Format a list of expenses as a table
///
/// One header row plus one row per expense: id, date, description, amount.
/// Column alignment is cosmetic; amounts carry the currency symbol and two
/// decimal places.
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    // Calculate column widths
    let id_width = expenses
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let date_width = expenses
        .iter()
        .map(|e| e.date.format(date_format).to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let description_width = expenses
        .iter()
        .map(|e| e.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<date_width$}  {:<description_width$}  {:>10}\n",
        "ID",
        "Date",
        "Description",
        "Amount",
        id_width = id_width,
        date_width = date_width,
        description_width = description_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<id_width$}  {:-<date_width$}  {:-<description_width$}  {:->10}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        date_width = date_width,
        description_width = description_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<id_width$}  {:<date_width$}  {:<description_width$}  {:>10}\n",
            expense.id.to_string(),
            expense.date.format(date_format).to_string(),
            expense.description,
            expense.amount.format_with_symbol(symbol),
            id_width = id_width,
            date_width = date_width,
            description_width = description_width,
        ));
    }

    output
}

/// Format a summary report for display
pub fn format_summary(report: &SummaryReport, symbol: &str) -> String {
    match report.month {
        Some(month) => format!(
            "Total expenses for {}: {}\n",
            month.name(),
            report.total.format_with_symbol(symbol)
        ),
        None => format!(
            "Total expenses: {}\n",
            report.total.format_with_symbol(symbol)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::{Month, NaiveDate};

    fn test_expenses() -> Vec<Expense> {
        vec![
            Expense::new(
                ExpenseId::new(1),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                "Lunch",
                Money::from_cents(2000),
            ),
            Expense::new(
                ExpenseId::new(2),
                NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
                "Groceries for the week",
                Money::from_cents(4520),
            ),
        ]
    }

    #[test]
    fn test_format_expense_table() {
        let output = format_expense_table(&test_expenses(), "$", "%Y-%m-%d");

        let mut lines = output.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("ID"));
        assert!(header.contains("Date"));
        assert!(header.contains("Description"));
        assert!(header.contains("Amount"));

        assert!(output.contains("2025-01-15"));
        assert!(output.contains("Lunch"));
        assert!(output.contains("$20.00"));
        assert!(output.contains("$45.20"));
    }

    #[test]
    fn test_format_empty_table() {
        let output = format_expense_table(&[], "$", "%Y-%m-%d");
        assert!(output.contains("No expenses recorded"));
    }

    #[test]
    fn test_format_table_honors_settings() {
        let output = format_expense_table(&test_expenses()[..1], "€", "%d/%m/%Y");
        assert!(output.contains("15/01/2025"));
        assert!(output.contains("€20.00"));
    }

    #[test]
    fn test_format_summary() {
        let all = SummaryReport {
            total: Money::from_cents(2500),
            month: None,
        };
        assert_eq!(format_summary(&all, "$"), "Total expenses: $25.00\n");

        let march = SummaryReport {
            total: Money::from_cents(1000),
            month: Some(Month::March),
        };
        assert_eq!(
            format_summary(&march, "$"),
            "Total expenses for March: $10.00\n"
        );
    }
}
