//! Service layer for the expense tracker
//!
//! The service layer provides the expense operations on top of the storage
//! layer, handling validation and id assignment.

pub mod expense;
pub mod import;

pub use expense::{ExpenseService, SummaryReport, UpdateExpense};
pub use import::{ColumnMapping, ImportResult, ImportService};
