//! Expense repository for JSON storage
//!
//! Manages loading and saving the full record set to expenses.json. The
//! repository keeps no in-memory state: every invocation reads the whole
//! file fresh and mutating operations rewrite it in full.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all expenses from disk, in stored order
    ///
    /// A missing or blank file is the legitimate empty state, not an error.
    /// Malformed content, including duplicate ids, is a parse error.
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses: Vec<Expense> = read_json_or_default(&self.path)?;

        let mut seen = HashSet::new();
        for expense in &expenses {
            if !seen.insert(expense.id) {
                return Err(ExpenseError::Parse(format!(
                    "Duplicate expense id {} in {}",
                    expense.id,
                    self.path.display()
                )));
            }
        }

        Ok(expenses)
    }

    /// Save the full record set to disk, overwriting prior content
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, &expenses)
    }
}
