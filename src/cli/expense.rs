//! Expense CLI commands
//!
//! Bridges the clap argument parsing with the service layer: parses amount
//! and date strings, runs one operation, prints the outcome.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::models::{ExpenseId, Money};
use crate::services::{ColumnMapping, ExpenseService, ImportService, UpdateExpense};
use crate::storage::ExpenseRepository;

/// Parse an amount string into Money
fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '20' or '19.99'. Error: {}",
            s, e
        ))
    })
}

/// Parse a date string in YYYY-MM-DD format
fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ExpenseError::Parse(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s)))
}

/// Handle the `add` command
pub fn handle_add(
    store: &ExpenseRepository,
    description: String,
    amount: String,
) -> ExpenseResult<()> {
    let amount = parse_amount(&amount)?;
    let expense = ExpenseService::new(store).add(description, amount)?;

    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}

/// Handle the `delete` command
pub fn handle_delete(store: &ExpenseRepository, id: u32) -> ExpenseResult<()> {
    let removed = ExpenseService::new(store).delete(ExpenseId::new(id))?;

    println!(
        "Expense deleted successfully ({} {})",
        removed.date, removed.description
    );
    Ok(())
}

/// Handle the `update` command
pub fn handle_update(
    store: &ExpenseRepository,
    id: u32,
    description: Option<String>,
    amount: Option<String>,
    date: Option<String>,
) -> ExpenseResult<()> {
    let changes = UpdateExpense {
        description,
        amount: amount.as_deref().map(parse_amount).transpose()?,
        date: date.as_deref().map(parse_date).transpose()?,
    };

    let updated = ExpenseService::new(store).update(ExpenseId::new(id), changes)?;

    println!("Expense updated successfully");
    println!("  ID:          {}", updated.id);
    println!("  Date:        {}", updated.date);
    println!("  Description: {}", updated.description);
    println!("  Amount:      {}", updated.amount);
    Ok(())
}

/// Handle the `list` command
pub fn handle_list(store: &ExpenseRepository, settings: &Settings) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(store).list()?;

    print!(
        "{}",
        format_expense_table(&expenses, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Handle the `summary` command
pub fn handle_summary(
    store: &ExpenseRepository,
    settings: &Settings,
    month: Option<u32>,
) -> ExpenseResult<()> {
    let report = ExpenseService::new(store).summary(month)?;

    print!("{}", format_summary(&report, &settings.currency_symbol));
    Ok(())
}

/// Handle the `import` command
pub fn handle_import(
    store: &ExpenseRepository,
    file: &Path,
    date_format: Option<String>,
    no_header: bool,
) -> ExpenseResult<()> {
    let reader = File::open(file)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", file.display(), e)))?;

    let mut mapping = ColumnMapping::new().with_header(!no_header);
    if let Some(format) = date_format {
        mapping = mapping.with_date_format(&format);
    }

    let result = ImportService::new(store).import(reader, &mapping)?;

    println!("Imported {} expenses from {}", result.imported, file.display());
    for (line, reason) in &result.skipped {
        println!("  Skipped line {}: {}", line, reason);
    }
    Ok(())
}

/// Handle the `export` command
pub fn handle_export(store: &ExpenseRepository, output: &Path) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(store).list()?;

    let mut writer = File::create(output)
        .map_err(|e| ExpenseError::Io(format!("Failed to create {}: {}", output.display(), e)))?;
    export_expenses_csv(&expenses, &mut writer)?;

    println!("Exported {} expenses to {}", expenses.len(), output.display());
    Ok(())
}
