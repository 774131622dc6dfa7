//! Catalog migration from a tabular source.
//!
//! Each data row of the source binds one value to one specification. Rows
//! are grouped by the specification-name column in first-seen order; the
//! group position becomes the specification's generation order. Every
//! produced entity gets a fresh id from the injected generator — nothing is
//! recoverable from the source table.

use sku_model::{IdGenerator, SpecValue, Specification};

use crate::tabular::{SourceCell, SourceTable};

/// Fixed header of the tabular source, in column order.
pub const SOURCE_HEADER: [&str; 3] = ["Specification", "Value", "SKU Code"];

/// Converts a tabular source into a specification catalog.
///
/// Returns `None` when the table is empty or header-only: there is nothing
/// to migrate, which is not an error. The header row is fixed by contract
/// and skipped, not re-verified. Rows with an empty specification-name cell
/// are skipped.
pub fn migrate_catalog(
    table: &SourceTable,
    ids: &mut dyn IdGenerator,
) -> Option<Vec<Specification>> {
    let mut catalog: Vec<Specification> = Vec::new();
    for row in table.data_rows() {
        let name = cell_text(row, 0);
        if name.is_empty() {
            continue;
        }
        let label = cell_text(row, 1);
        let fragment = cell_text(row, 2);
        let index = match catalog.iter().position(|spec| spec.name == name) {
            Some(index) => index,
            None => {
                let order = catalog.len() as u32;
                catalog.push(Specification::new(ids.spec_id(), name, order));
                catalog.len() - 1
            }
        };
        catalog[index].values.push(SpecValue {
            id: ids.value_id(),
            display_value: label.to_string(),
            sku_fragment: fragment.to_string(),
        });
    }
    if catalog.is_empty() {
        None
    } else {
        Some(catalog)
    }
}

fn cell_text(row: &[SourceCell], column: usize) -> &str {
    row.get(column).map(SourceCell::text).unwrap_or("").trim()
}
