//! Expense service
//!
//! Business logic for the expense operations: add, delete, update, list and
//! summarize. Every operation loads the record set fresh from the
//! repository and mutating operations write the whole set back.

use chrono::{Datelike, Local, Month, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::ExpenseRepository;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseRepository,
}

/// Fields of an expense that an update may overwrite
///
/// Each field is an explicit option so that "not provided" is distinguishable
/// from "provided but empty": only supplied fields are overwritten.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpense {
    /// New description, if supplied
    pub description: Option<String>,
    /// New amount, if supplied
    pub amount: Option<Money>,
    /// New date, if supplied
    pub date: Option<NaiveDate>,
}

impl UpdateExpense {
    /// Check whether no field was supplied
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.date.is_none()
    }
}

/// Result of a summary query
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Sum of the matching amounts
    pub total: Money,
    /// The month the report was filtered to, if any
    pub month: Option<Month>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseRepository) -> Self {
        Self { store }
    }

    /// Add a new expense dated today, returning the created record
    ///
    /// The amount is validated before storage is touched. The new id is one
    /// greater than the largest id in the set, or 1 for an empty set.
    pub fn add(&self, description: impl Into<String>, amount: Money) -> ExpenseResult<Expense> {
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(
                "Amount must be a positive number".into(),
            ));
        }

        let mut expenses = self.store.load()?;

        let id = expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|id| id.next())
            .unwrap_or_else(ExpenseId::first);

        let expense = Expense::new(id, Local::now().date_naive(), description, amount);
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        Ok(expense)
    }

    /// Delete an expense by id, returning the removed record
    ///
    /// The relative order of the remaining records is preserved. Storage is
    /// not rewritten when the id does not resolve.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;

        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let removed = expenses.remove(index);
        self.store.save(&expenses)?;

        Ok(removed)
    }

    /// Update an expense in place, returning the updated record
    ///
    /// All supplied fields are validated before any is applied, so a failed
    /// update never partially mutates the record.
    pub fn update(&self, id: ExpenseId, changes: UpdateExpense) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;

        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        if changes.is_empty() {
            return Err(ExpenseError::Validation(
                "No fields provided to update".into(),
            ));
        }

        if let Some(amount) = changes.amount {
            if !amount.is_positive() {
                return Err(ExpenseError::Validation(
                    "Amount must be a positive number".into(),
                ));
            }
        }

        let expense = &mut expenses[index];
        if let Some(description) = changes.description {
            expense.description = description;
        }
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }

        let updated = expense.clone();
        self.store.save(&expenses)?;

        Ok(updated)
    }

    /// List all expenses in storage order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load()
    }

    /// Summarize expenses, optionally restricted to a month (1-12)
    ///
    /// Without a month the total covers every record regardless of date.
    /// With a month, only records from that month of the current calendar
    /// year are counted.
    pub fn summary(&self, month: Option<u32>) -> ExpenseResult<SummaryReport> {
        let month = month
            .map(|m| {
                Month::try_from(u8::try_from(m).unwrap_or(0)).map_err(|_| {
                    ExpenseError::Validation(format!(
                        "Invalid month: {}. Must be between 1 and 12",
                        m
                    ))
                })
            })
            .transpose()?;

        let expenses = self.store.load()?;

        let total = match month {
            Some(month) => {
                let today = Local::now().date_naive();
                expenses
                    .iter()
                    .filter(|e| {
                        e.date.year() == today.year()
                            && e.date.month() == month.number_from_month()
                    })
                    .map(|e| e.amount)
                    .sum()
            }
            None => expenses.iter().map(|e| e.amount).sum(),
        };

        Ok(SummaryReport { total, month })
    }
}
