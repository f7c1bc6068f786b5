use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add, handle_delete, handle_export, handle_import, handle_list, handle_summary,
    handle_update,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::storage::ExpenseRepository;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Command-line personal expense tracker",
    long_about = "A simple expense tracker for the command line: record, edit, \
                  remove, list, and summarize expenses kept in a local JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(short, long)]
        description: String,
        /// Amount of the expense (e.g., "20" or "19.99")
        #[arg(short, long)]
        amount: String,
    },

    /// Delete an expense by ID
    Delete {
        /// ID of the expense to delete
        #[arg(long)]
        id: u32,
    },

    /// Update an existing expense
    Update {
        /// ID of the expense to update
        #[arg(long)]
        id: u32,
        /// New description for the expense
        #[arg(short, long)]
        description: Option<String>,
        /// New amount for the expense
        #[arg(short, long)]
        amount: Option<String>,
        /// New date for the expense (format: YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// List all expenses
    List,

    /// Show summary of expenses
    Summary {
        /// Month to filter expenses (1-12, current year)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Import expenses from a CSV file
    Import {
        /// Path to the CSV file (columns: date, description, amount)
        file: PathBuf,
        /// Date format of the CSV date column (strftime format)
        #[arg(long)]
        date_format: Option<String>,
        /// Treat the first row as data instead of a header
        #[arg(long)]
        no_header: bool,
    },

    /// Export expenses to a CSV file
    Export {
        /// Output path
        #[arg(short, long, default_value = "expenses.csv")]
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let store = ExpenseRepository::new(paths.expenses_file());

    match cli.command {
        Commands::Add {
            description,
            amount,
        } => {
            handle_add(&store, description, amount)?;
        }
        Commands::Delete { id } => {
            handle_delete(&store, id)?;
        }
        Commands::Update {
            id,
            description,
            amount,
            date,
        } => {
            handle_update(&store, id, description, amount, date)?;
        }
        Commands::List => {
            handle_list(&store, &settings)?;
        }
        Commands::Summary { month } => {
            handle_summary(&store, &settings, month)?;
        }
        Commands::Import {
            file,
            date_format,
            no_header,
        } => {
            handle_import(&store, &file, date_format, no_header)?;
        }
        Commands::Export { output } => {
            handle_export(&store, &output)?;
        }
        Commands::Config => {
            // Persist defaults on first run so the settings file can be edited
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
