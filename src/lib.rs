//! # Finance Manager
//!
//! Loads personal-finance records (accounts, categories, transactions) from
//! CSV files, writes them back out as JSON, and answers two questions over
//! the loaded transactions: what an account's balance was on a given date,
//! and how much was spent in a category over a date range.
//!
//! ## Design Principles
//!
//! - **Lenient content**: malformed numbers become NaN and malformed dates
//!   become `None`; only I/O and stream faults are errors
//! - **One ingestion pipeline**: each record type only supplies a
//!   [`FromRow`] projection
//! - **Weak references**: transactions name their account and category,
//!   nothing checks those names exist
//! - **Deterministic sums**: queries accumulate in input order
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use finance_manager::{account_balance_by_date, create_accounts, create_transactions};
//!
//! let accounts = create_accounts("comptes.csv").unwrap();
//! let transactions = create_transactions("transactions.csv").unwrap();
//! let cutoff = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let balance = account_balance_by_date(&transactions, &accounts[0], cutoff);
//! println!("{balance}");
//! ```

pub mod account;
pub mod category;
pub mod error;
pub mod export;
pub mod field;
pub mod ingest;
pub mod query;
pub mod transaction;

use std::io::Read;
use std::path::Path;

pub use account::Account;
pub use category::Category;
pub use error::{FinanceError, Result};
pub use export::{
    export_accounts_to_json, export_categories_to_json, export_transactions_to_json, write_json,
};
pub use ingest::{load_records, read_records, Columns, CsvRow, FromRow};
pub use query::{account_balance_by_date, spending_by_category};
pub use transaction::Transaction;

/// Command-line usage, shown on argument errors.
pub const USAGE: &str = "  finance-manager export <accounts|categories|transactions> <input.csv> <output.json>
  finance-manager balance <accounts.csv> <transactions.csv> <account> <date>
  finance-manager spending <transactions.csv> <category> <start> <end>";

/// Loads accounts from a CSV file with `nom,solde` columns.
pub fn create_accounts(path: impl AsRef<Path>) -> Result<Vec<Account>> {
    load_records(path)
}

/// Loads categories from a CSV file with `nom,description` columns.
pub fn create_categories(path: impl AsRef<Path>) -> Result<Vec<Category>> {
    load_records(path)
}

/// Loads transactions from a CSV file with
/// `montant,compte,date,description,type,categorie` columns.
pub fn create_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    load_records(path)
}

/// Reads accounts from any CSV stream.
pub fn read_accounts<R: Read>(reader: R) -> Result<Vec<Account>> {
    read_records(reader)
}

/// Reads categories from any CSV stream.
pub fn read_categories<R: Read>(reader: R) -> Result<Vec<Category>> {
    read_records(reader)
}

/// Reads transactions from any CSV stream.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    read_records(reader)
}
