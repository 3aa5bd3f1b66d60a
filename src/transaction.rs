//! Transaction model.
//!
//! A transaction refers to its account and category by name only. Nothing
//! checks that those names exist in any loaded account or category list.

use crate::field;
use crate::ingest::{CsvRow, FromRow};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// A dated monetary movement.
///
/// Field names on the wire follow the CSV header: `montant`, `compte`,
/// `date`, `description`, `type`, `categorie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed amount. NaN when the source value is absent or malformed.
    #[serde(rename = "montant", deserialize_with = "field::nan_from_null")]
    pub amount: f64,

    /// Name of the account the movement applies to.
    #[serde(rename = "compte", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Calendar date. `None` is the invalid-date sentinel.
    ///
    /// Written to JSON as a bare `YYYY-MM-DD` date, not a UTC timestamp
    /// such as `2024-06-01T00:00:00.000Z`.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form transaction type (e.g. "debit", "credit").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name of the category the movement belongs to.
    #[serde(rename = "categorie", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FromRow for Transaction {
    const KIND: &'static str = "transactions";

    fn from_row(row: &CsvRow<'_>) -> Self {
        let amount = field::parse_number(row.get("montant"));
        if amount.is_nan() {
            debug!("Row {}: amount {:?} is not a number", row.line(), row.get("montant"));
        }

        let date = row.get("date").and_then(field::parse_date);
        if date.is_none() {
            debug!("Row {}: date {:?} is not a valid date", row.line(), row.get("date"));
        }

        Transaction {
            amount,
            account: row.string("compte"),
            date,
            description: row.string("description"),
            kind: row.string("type"),
            category: row.string("categorie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_records;
    use std::io::Cursor;

    fn parse(csv: &str) -> Vec<Transaction> {
        read_records(Cursor::new(csv)).unwrap()
    }

    #[test]
    fn test_from_row() {
        let txs = parse(
            "montant,compte,date,description,type,categorie\n\
             -42.5,Courant,2024-06-01,Courses,debit,food\n",
        );

        assert_eq!(
            txs[0],
            Transaction {
                amount: -42.5,
                account: Some("Courant".to_string()),
                date: NaiveDate::from_ymd_opt(2024, 6, 1),
                description: Some("Courses".to_string()),
                kind: Some("debit".to_string()),
                category: Some("food".to_string()),
            }
        );
    }

    #[test]
    fn test_quoted_description_with_comma() {
        let txs = parse(
            "montant,compte,date,description,type,categorie\n\
             10,Courant,2024-06-01,\"Cinema, popcorn\",debit,loisirs\n",
        );
        assert_eq!(txs[0].description.as_deref(), Some("Cinema, popcorn"));
        assert_eq!(txs[0].category.as_deref(), Some("loisirs"));
    }

    #[test]
    fn test_bad_values_become_sentinels() {
        let txs = parse(
            "montant,compte,date,description,type,categorie\n\
             dix,Courant,hier,Courses,debit,food\n",
        );

        assert_eq!(txs.len(), 1);
        assert!(txs[0].amount.is_nan());
        assert_eq!(txs[0].date, None);
        assert_eq!(txs[0].account.as_deref(), Some("Courant"));
    }

    #[test]
    fn test_extra_columns_ignored_missing_columns_absent() {
        let txs = parse("montant,date,memo\n5,2024-01-02,ignored\n");

        assert_eq!(txs[0].amount, 5.0);
        assert_eq!(txs[0].account, None);
        assert_eq!(txs[0].category, None);
        assert_eq!(txs[0].kind, None);
    }

    #[test]
    fn test_json_shape() {
        let txs = parse(
            "montant,compte,date,description,type,categorie\n\
             12,Courant,2024-06-01,Bus,debit,transport\n\
             3,Courant,garbage,,debit,transport\n",
        );

        let json = serde_json::to_string(&txs[0]).unwrap();
        assert_eq!(
            json,
            r#"{"montant":12.0,"compte":"Courant","date":"2024-06-01","description":"Bus","type":"debit","categorie":"transport"}"#
        );

        let json = serde_json::to_string(&txs[1]).unwrap();
        assert!(json.contains(r#""date":null"#));
        assert!(json.contains(r#""description":"""#));
    }
}
