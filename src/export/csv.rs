//! CSV export functionality
//!
//! Exports the full expense record set to CSV format.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export all expenses to CSV
///
/// Writes a header row followed by one row per expense, amounts with two
/// decimal places and no currency symbol (spreadsheet-friendly).
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "ID,Date,Description,Amount")
        .map_err(|e| ExpenseError::Io(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{:.2}",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            escape_csv(&expense.description),
            expense.amount.to_units(),
        )
        .map_err(|e| ExpenseError::Io(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense::new(
                ExpenseId::new(1),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                "Lunch",
                Money::from_cents(2000),
            ),
            Expense::new(
                ExpenseId::new(2),
                NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
                "Bus ticket",
                Money::from_cents(275),
            ),
        ];

        let mut csv_output = Vec::new();
        export_expenses_csv(&expenses, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(
            csv_string,
            "ID,Date,Description,Amount\n\
             1,2025-01-15,Lunch,20.00\n\
             2,2025-02-03,Bus ticket,2.75\n"
        );
    }

    #[test]
    fn test_export_escapes_fields() {
        let expenses = vec![Expense::new(
            ExpenseId::new(1),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Dinner, with \"friends\"",
            Money::from_cents(9999),
        )];

        let mut csv_output = Vec::new();
        export_expenses_csv(&expenses, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"Dinner, with \"\"friends\"\"\""));
    }

    #[test]
    fn test_export_empty_set_is_header_only() {
        let mut csv_output = Vec::new();
        export_expenses_csv(&[], &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(csv_string, "ID,Date,Description,Amount\n");
    }
}
