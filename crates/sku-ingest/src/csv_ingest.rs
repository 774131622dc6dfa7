//! CSV loading for the driver surface.
//!
//! Catalog files load into a [`SourceTable`]; data files load into a
//! [`Sheet`] whose columns are bound against the already-migrated catalog by
//! header name.

use std::path::Path;

use csv::ReaderBuilder;

use sku_model::{Column, ColumnKind, Sheet, SheetId, SheetKind, SheetRow, Specification};

use crate::error::{IngestError, Result};
use crate::tabular::{SourceCell, SourceTable};

/// Header titles recognized as the generated-code column.
const SKU_HEADERS: [&str; 2] = ["sku", "sku code"];

/// Reads a CSV file into a raw source table, header row included.
pub fn load_source_table(path: &Path) -> Result<SourceTable> {
    let records = read_records(path)?;
    let rows = records
        .into_iter()
        .map(|record| record.into_iter().map(SourceCell::new).collect())
        .collect();
    Ok(SourceTable::new(rows))
}

/// Reads a CSV file into a data sheet bound against `catalog`.
///
/// The first record is the header. A header matching a specification name
/// (case-insensitive) binds that column as a selection; `SKU` or `SKU Code`
/// binds the generated-code column; anything else is free-form text. When no
/// header names the code column, a trailing `SKU Code` column is appended so
/// recalculation has somewhere to write.
pub fn load_sheet(path: &Path, id: SheetId, catalog: &[Specification]) -> Result<Sheet> {
    let mut records = read_records(path)?.into_iter();
    let header = records.next().ok_or_else(|| IngestError::EmptyCsv {
        path: path.to_path_buf(),
    })?;

    let mut columns: Vec<Column> = header
        .iter()
        .map(|title| bind_column(title, catalog))
        .collect();
    if !columns.iter().any(|c| c.kind == ColumnKind::SkuCode) {
        columns.push(Column::sku_code("SKU Code"));
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| id.to_string());
    let mut sheet = Sheet::new(id, name, SheetKind::Data, columns);
    for record in records {
        sheet.push_row(SheetRow::new(record));
    }
    Ok(sheet)
}

fn bind_column(title: &str, catalog: &[Specification]) -> Column {
    let lowered = title.to_lowercase();
    if SKU_HEADERS.contains(&lowered.as_str()) {
        return Column::sku_code(title);
    }
    match catalog
        .iter()
        .find(|spec| spec.name.to_lowercase() == lowered)
    {
        Some(spec) => Column::selection(title, spec.id.clone()),
        None => Column::text(title),
    }
}

fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| map_open_error(path, source))?;
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().map(normalize_cell).collect());
    }
    if records.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

fn map_open_error(path: &Path, source: csv::Error) -> IngestError {
    let not_found = matches!(
        source.kind(),
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
    );
    if not_found {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
