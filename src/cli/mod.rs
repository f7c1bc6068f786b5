//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;

pub use expense::{
    handle_add, handle_delete, handle_export, handle_import, handle_list, handle_summary,
    handle_update,
};
