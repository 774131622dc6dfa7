//! Bulk recalculation of generated SKU columns.
//!
//! Any catalog mutation or settings save invalidates every derived code:
//! fragment text and composition order can both shift, so recalculation is
//! always a full pass over every data sheet, never an incremental diff. The
//! caller commits the new catalog/settings snapshot first, then invokes
//! [`recalculate_all`], then re-runs validation.

use sku_model::{Sheet, SheetId, SkuSettings, Specification};

use crate::generate::generate;

/// Boundary to the sheet-data collaborator.
///
/// `data_sheets` returns snapshots of every sheet flagged as a data sheet;
/// `set_column_values` replaces one column of one sheet, row by row, leaving
/// every other cell untouched.
pub trait SheetStore {
    fn data_sheets(&self) -> Vec<Sheet>;
    fn set_column_values(&mut self, sheet: &SheetId, column: usize, values: Vec<String>);
}

/// Counters returned by a recalculation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecalcOutcome {
    /// Data sheets whose code column was rewritten.
    pub sheets: usize,
    /// Rows recomputed across all sheets.
    pub rows: usize,
}

/// Recomputes the generated-code column of every data sheet.
///
/// Sheets with no rows or no designated code column are skipped. Writes are
/// scoped to the code column only.
pub fn recalculate_all(
    store: &mut dyn SheetStore,
    catalog: &[Specification],
    settings: &SkuSettings,
) -> RecalcOutcome {
    let mut outcome = RecalcOutcome::default();
    for sheet in store.data_sheets() {
        if sheet.rows.is_empty() {
            continue;
        }
        let Some(column) = sheet.sku_column() else {
            tracing::debug!(sheet = %sheet.id, "no code column, skipping");
            continue;
        };
        let codes: Vec<String> = sheet
            .rows
            .iter()
            .map(|row| generate(&sheet.selected_values(row), catalog, settings))
            .collect();
        tracing::debug!(sheet = %sheet.id, rows = codes.len(), "recalculated code column");
        outcome.sheets += 1;
        outcome.rows += codes.len();
        store.set_column_values(&sheet.id, column, codes);
    }
    tracing::info!(
        sheets = outcome.sheets,
        rows = outcome.rows,
        "recalculation pass complete"
    );
    outcome
}

/// In-memory [`SheetStore`] used by the CLI driver and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySheetStore {
    sheets: Vec<Sheet>,
}

impl MemorySheetStore {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn insert(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, id: &SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| &sheet.id == id)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }
}

impl SheetStore for MemorySheetStore {
    fn data_sheets(&self) -> Vec<Sheet> {
        self.sheets
            .iter()
            .filter(|sheet| sheet.is_data())
            .cloned()
            .collect()
    }

    fn set_column_values(&mut self, sheet: &SheetId, column: usize, values: Vec<String>) {
        let Some(sheet) = self.sheets.iter_mut().find(|s| &s.id == sheet) else {
            return;
        };
        for (row, value) in sheet.rows.iter_mut().zip(values) {
            row.set_cell(column, value);
        }
    }
}
