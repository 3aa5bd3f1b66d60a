//! Generic CSV ingestion.
//!
//! Every record type is loaded by the same pipeline: the header row names the
//! fields, each data row is handed to the type's [`FromRow`] projection, and
//! the records are collected in input order. Content never fails a row; only
//! I/O and stream faults abort, and then nothing is returned.

use crate::error::{FinanceError, Result};
use csv::{ReaderBuilder, StringRecord};
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Column positions keyed by header name, resolved once per source.
///
/// Names match exactly; when a name repeats, the first column wins.
#[derive(Debug, Default)]
pub struct Columns {
    positions: HashMap<String, usize>,
}

impl Columns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            positions.entry(name.to_string()).or_insert(idx);
        }
        Columns { positions }
    }

    /// Position of the named column, if the header has it.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.positions.get(field).copied()
    }
}

/// A single data row viewed through the header row.
pub struct CsvRow<'a> {
    columns: &'a Columns,
    record: &'a StringRecord,
    line: u64,
}

impl<'a> CsvRow<'a> {
    /// Creates a row view. `line` is the 1-indexed line number in the source.
    pub fn new(columns: &'a Columns, record: &'a StringRecord, line: u64) -> Self {
        CsvRow {
            columns,
            record,
            line,
        }
    }

    /// Returns the value of the named column.
    ///
    /// Returns `None` when the header has no such column or the row is too
    /// short to reach it.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.record.get(self.columns.position(field)?)
    }

    /// Returns the named column as an owned string.
    pub fn string(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    /// Line number of the row in its source, for diagnostics.
    pub fn line(&self) -> u64 {
        self.line
    }
}

/// Projection of a CSV row onto a record type.
///
/// Implementations must not fail: absent or malformed values become the
/// field's sentinel.
pub trait FromRow: Sized {
    /// Name used in log lines (e.g. "accounts").
    const KIND: &'static str;

    /// Builds one record from one row.
    fn from_row(row: &CsvRow<'_>) -> Self;
}

/// Reads every record from a CSV stream.
///
/// Rows may have differing lengths; extra columns are ignored.
pub fn read_records<T: FromRow, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(csv_reader.headers()?);

    let mut records = Vec::new();
    let mut record = StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        records.push(T::from_row(&CsvRow::new(&columns, &record, line)));
    }

    Ok(records)
}

/// Opens a CSV file and reads every record from it.
pub fn load_records<T: FromRow>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FinanceError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(BufReader::new(file))?;
    info!(
        "CSV file successfully processed: {} {} from {}",
        records.len(),
        T::KIND,
        path.display()
    );
    Ok(records)
}
