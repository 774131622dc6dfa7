#![deny(unsafe_code)]

//! Sheet, column, and row types shared with the sheet-data collaborator.
//!
//! A sheet is a plain cell matrix. One column on a data sheet is designated
//! as the read-only generated-code column; the others carry either a
//! specification-bound selection or free-form text. Empty string means an
//! empty cell.

use serde::{Deserialize, Serialize};

use crate::{SelectedValues, SheetId, SpecId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    /// Holds product rows; covered by recalculation and validation.
    Data,
    /// Holds the catalog or settings source; never recalculated.
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "spec")]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// The designated generated-code column.
    SkuCode,
    /// Selection cells bound to one specification.
    Selection(SpecId),
    /// Free-form text, ignored by the engine.
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn sku_code(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ColumnKind::SkuCode,
        }
    }

    pub fn selection(title: impl Into<String>, spec: SpecId) -> Self {
        Self {
            title: title.into(),
            kind: ColumnKind::Selection(spec),
        }
    }

    pub fn text(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ColumnKind::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub cells: Vec<String>,
}

impl SheetRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Returns the cell at `column`, empty string when out of bounds.
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set_cell(&mut self, column: usize, value: String) {
        if self.cells.len() <= column {
            self.cells.resize(column + 1, String::new());
        }
        self.cells[column] = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: SheetId,
    pub name: String,
    pub kind: SheetKind,
    pub columns: Vec<Column>,
    pub rows: Vec<SheetRow>,
}

impl Sheet {
    pub fn new(id: SheetId, name: impl Into<String>, kind: SheetKind, columns: Vec<Column>) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: SheetRow) {
        self.rows.push(row);
    }

    pub fn is_data(&self) -> bool {
        self.kind == SheetKind::Data
    }

    /// Index of the designated generated-code column, if any.
    pub fn sku_column(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.kind == ColumnKind::SkuCode)
    }

    /// Selection columns as `(column index, bound specification id)` pairs.
    pub fn selection_columns(&self) -> impl Iterator<Item = (usize, &SpecId)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(index, column)| match &column.kind {
                ColumnKind::Selection(spec) => Some((index, spec)),
                ColumnKind::SkuCode | ColumnKind::Text => None,
            })
    }

    /// Assembles a row's selected values from its non-empty selection cells.
    pub fn selected_values(&self, row: &SheetRow) -> SelectedValues {
        let mut selected = SelectedValues::new();
        for (column, spec) in self.selection_columns() {
            let label = row.cell(column);
            if !label.is_empty() {
                selected.insert(spec.clone(), label.to_string());
            }
        }
        selected
    }

    /// True when the row carries at least one non-empty selection cell,
    /// which puts it in scope for validation.
    pub fn has_selection(&self, row: &SheetRow) -> bool {
        self.selection_columns()
            .any(|(column, _)| !row.cell(column).is_empty())
    }

    /// User-facing row number for a 0-based data row index.
    ///
    /// Row 1 is the header, so data row 0 reports as row 2.
    pub fn display_row(index: usize) -> usize {
        index + 2
    }
}
