//! Export module for the expense tracker
//!
//! Provides data export in spreadsheet-compatible CSV format.

pub mod csv;

pub use csv::export_expenses_csv;
