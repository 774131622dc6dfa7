mod engine;

pub use engine::validate_sheet;

use sku_model::{Sheet, Specification, ValidationReport};

/// Validates every data sheet, yielding one report per sheet in input order.
pub fn validate_sheets(sheets: &[Sheet], catalog: &[Specification]) -> Vec<ValidationReport> {
    sheets
        .iter()
        .filter(|sheet| sheet.is_data())
        .map(|sheet| ValidationReport {
            sheet: sheet.id.clone(),
            issues: validate_sheet(sheet, catalog),
        })
        .collect()
}
