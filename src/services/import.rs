//! CSV import service
//!
//! Imports expenses from CSV files: column mapping, date parsing, per-row
//! validation, and batch append with fresh sequential ids.

use std::io::Read;

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::ExpenseRepository;

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the description column
    pub description_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            description_column: 1,
            amount_column: 2,
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }
}

impl ColumnMapping {
    /// Create a new column mapping with the default layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of rows appended to the record set
    pub imported: usize,
    /// Rows that were skipped, with their line number and reason
    pub skipped: Vec<(usize, String)>,
}

/// Service for importing expenses from CSV data
pub struct ImportService<'a> {
    store: &'a ExpenseRepository,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(store: &'a ExpenseRepository) -> Self {
        Self { store }
    }

    /// Import expenses from CSV data
    ///
    /// Valid rows are appended with fresh sequential ids continuing from the
    /// current maximum. Rows with an unparseable date or amount, a missing
    /// column, or a non-positive amount are skipped and reported.
    pub fn import<R: Read>(
        &self,
        reader: R,
        mapping: &ColumnMapping,
    ) -> ExpenseResult<ImportResult> {
        let mut expenses = self.store.load()?;

        let mut next_id = expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|id| id.next())
            .unwrap_or_else(ExpenseId::first);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(mapping.has_header)
            .delimiter(mapping.delimiter as u8)
            .flexible(true)
            .from_reader(reader);

        let mut result = ImportResult::default();
        let first_data_line = if mapping.has_header { 2 } else { 1 };

        for (row, record) in csv_reader.records().enumerate() {
            let line = first_data_line + row;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    result.skipped.push((line, format!("unreadable row: {}", e)));
                    continue;
                }
            };

            let Some(date_field) = record.get(mapping.date_column) else {
                result.skipped.push((line, "missing date column".into()));
                continue;
            };
            let Some(amount_field) = record.get(mapping.amount_column) else {
                result.skipped.push((line, "missing amount column".into()));
                continue;
            };
            let description = record.get(mapping.description_column).unwrap_or("");

            let date = match NaiveDate::parse_from_str(date_field.trim(), &mapping.date_format) {
                Ok(date) => date,
                Err(_) => {
                    result
                        .skipped
                        .push((line, format!("invalid date: '{}'", date_field.trim())));
                    continue;
                }
            };

            let amount = match Money::parse(amount_field) {
                Ok(amount) => amount,
                Err(_) => {
                    result
                        .skipped
                        .push((line, format!("invalid amount: '{}'", amount_field.trim())));
                    continue;
                }
            };

            if !amount.is_positive() {
                result
                    .skipped
                    .push((line, format!("amount must be positive: '{}'", amount_field.trim())));
                continue;
            }

            expenses.push(Expense::new(next_id, date, description.trim(), amount));
            next_id = next_id.next();
            result.imported += 1;
        }

        if result.imported > 0 {
            self.store.save(&expenses)?;
        }

        Ok(result)
    }
}
