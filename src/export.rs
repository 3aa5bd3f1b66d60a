//! JSON export.
//!
//! Records are written as a pretty-printed JSON array (2-space indent, keys
//! in declared field order), replacing any existing file content.

use crate::account::Account;
use crate::category::Category;
use crate::error::{FinanceError, Result};
use crate::transaction::Transaction;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes records as a pretty-printed JSON array.
pub fn write_json<T: Serialize, W: Write>(records: &[T], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Serializes records to `path`, truncating the file first.
fn export_to_json<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let unwritable = |source: std::io::Error| FinanceError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(unwritable)?);
    write_json(records, &mut writer)?;
    writer.flush().map_err(unwritable)?;
    Ok(())
}

/// Writes accounts to a JSON file.
pub fn export_accounts_to_json(accounts: &[Account], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    export_to_json(accounts, path)?;
    info!("Accounts data has been written to {}", path.display());
    Ok(())
}

/// Writes categories to a JSON file.
pub fn export_categories_to_json(categories: &[Category], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    export_to_json(categories, path)?;
    info!("Categories data has been written to {}", path.display());
    Ok(())
}

/// Writes transactions to a JSON file.
pub fn export_transactions_to_json(
    transactions: &[Transaction],
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    export_to_json(transactions, path)?;
    info!("Transactions data has been written to {}", path.display());
    Ok(())
}
