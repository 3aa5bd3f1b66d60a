//! Category model.

use crate::ingest::{CsvRow, FromRow};
use serde::{Deserialize, Serialize};

/// A transaction classification such as food or transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "nom", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text description, absent when the source omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Category {
            name: Some(name.into()),
            description,
        }
    }
}

impl FromRow for Category {
    const KIND: &'static str = "categories";

    fn from_row(row: &CsvRow<'_>) -> Self {
        Category {
            name: row.string("nom"),
            description: row.string("description"),
        }
    }
}
