//! Account model.

use crate::field;
use crate::ingest::{CsvRow, FromRow};
use log::debug;
use serde::{Deserialize, Serialize};

/// A named balance-holding entity (a bank account or a wallet).
///
/// Serialized with the same field names as its CSV columns, `nom` and `solde`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account name. `None` when the source row has no `nom` value.
    #[serde(rename = "nom", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stated balance. NaN when the source value is absent or malformed.
    #[serde(rename = "solde", deserialize_with = "field::nan_from_null")]
    pub balance: f64,
}

impl Account {
    /// Creates an account.
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Account {
            name: Some(name.into()),
            balance,
        }
    }
}

impl FromRow for Account {
    const KIND: &'static str = "accounts";

    fn from_row(row: &CsvRow<'_>) -> Self {
        let balance = field::parse_number(row.get("solde"));
        if balance.is_nan() {
            debug!("Row {}: balance {:?} is not a number", row.line(), row.get("solde"));
        }

        Account {
            name: row.string("nom"),
            balance,
        }
    }
}
