//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record itself and the money type behind it.

pub mod expense;
pub mod money;

pub use expense::{Expense, ExpenseId, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
