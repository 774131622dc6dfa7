//! Tabular source consumed by the catalog migration parser.
//!
//! The source is a rectangular grid of cells handed over by a spreadsheet
//! collaborator. Each cell exposes its raw value and, when the collaborator
//! formats cells, a display string.

use serde::{Deserialize, Serialize};

/// One cell of a tabular source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCell {
    /// Raw stored value.
    pub value: String,
    /// Formatted/display string, when the source provides one.
    pub display: Option<String>,
}

impl SourceCell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: None,
        }
    }

    pub fn with_display(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: Some(display.into()),
        }
    }

    /// The text migration reads: the display string when present, the raw
    /// value otherwise.
    pub fn text(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.value)
    }
}

/// A rectangular grid of source cells. The first row is the fixed
/// `Specification` / `Value` / `SKU Code` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    pub rows: Vec<Vec<SourceCell>>,
}

impl SourceTable {
    pub fn new(rows: Vec<Vec<SourceCell>>) -> Self {
        Self { rows }
    }

    /// Builds a table from plain strings, including the header row.
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(SourceCell::new).collect())
                .collect(),
        }
    }

    /// Rows below the header.
    pub fn data_rows(&self) -> impl Iterator<Item = &Vec<SourceCell>> {
        self.rows.iter().skip(1)
    }
}
