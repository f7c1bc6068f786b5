//! Expense record model
//!
//! Represents a single recorded expense: sequential identifier, calendar
//! date, free-text description, and a positive monetary amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::money::Money;

/// Strongly-typed identifier for expenses
///
/// Ids are assigned sequentially: one greater than the largest id currently
/// in the record set, starting at 1 for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// Create an id from its numeric value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The first id handed out in an empty record set
    pub const fn first() -> Self {
        Self(1)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A single recorded expense
///
/// Field order matters: it is the order the fields appear in the persisted
/// JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the record set
    pub id: ExpenseId,

    /// Calendar date of the expense (no time-of-day component)
    pub date: NaiveDate,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Amount spent; strictly positive for every stored record
    pub amount: Money,
}

impl Expense {
    /// Create a new expense record
    pub fn new(id: ExpenseId, date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
        }
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.value() == 0 {
            return Err(ExpenseValidationError::ZeroId);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount { amount: Money },
    ZeroId,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount { amount } => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::ZeroId => write!(f, "Expense id must be a positive integer"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
