//! Validation passes over one sheet.
//!
//! Two independent passes run over the same row set and their results are
//! concatenated: missing-value issues first (row order, then column order
//! within a row), duplicate-sku issues second (row order). Downstream
//! summarization relies on this ordering.

use std::collections::BTreeMap;

use sku_model::{IssueKind, Sheet, Specification, ValidationIssue, spec_by_id};

/// Validates one sheet against the catalog snapshot.
///
/// Scope is every row with at least one non-empty selection cell. The sheet
/// is never mutated and no input shape produces an error.
pub fn validate_sheet(sheet: &Sheet, catalog: &[Specification]) -> Vec<ValidationIssue> {
    let mut issues = missing_value_issues(sheet, catalog);
    issues.extend(duplicate_sku_issues(sheet));
    tracing::debug!(
        sheet = %sheet.id,
        issues = issues.len(),
        "validated sheet"
    );
    issues
}

/// One issue per non-empty selection cell whose label matches no current
/// value of the bound specification. A specification missing from the
/// catalog altogether fails the same way.
fn missing_value_issues(sheet: &Sheet, catalog: &[Specification]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (index, row) in sheet.rows.iter().enumerate() {
        if !sheet.has_selection(row) {
            continue;
        }
        for (column, spec_id) in sheet.selection_columns() {
            let label = row.cell(column);
            if label.is_empty() {
                continue;
            }
            let spec = spec_by_id(catalog, spec_id);
            if spec.is_some_and(|s| s.value_by_label(label).is_some()) {
                continue;
            }
            let spec_name = spec
                .map(|s| s.name.as_str())
                .unwrap_or(sheet.columns[column].title.as_str());
            issues.push(ValidationIssue {
                kind: IssueKind::MissingValue,
                message: format!("Value '{label}' not found in specification '{spec_name}'"),
                row: Sheet::display_row(index),
                column: Some(column),
            });
        }
    }
    issues
}

/// One issue per member row of every group of two or more rows sharing a
/// non-empty generated code. Empty codes are never duplicates.
fn duplicate_sku_issues(sheet: &Sheet) -> Vec<ValidationIssue> {
    let Some(code_column) = sheet.sku_column() else {
        return Vec::new();
    };
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, row) in sheet.rows.iter().enumerate() {
        if !sheet.has_selection(row) {
            continue;
        }
        let code = row.cell(code_column);
        if code.is_empty() {
            continue;
        }
        groups.entry(code).or_default().push(index);
    }

    let mut issues = Vec::new();
    for (code, rows) in &groups {
        if rows.len() < 2 {
            continue;
        }
        let row_list = rows
            .iter()
            .map(|index| Sheet::display_row(*index).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        for index in rows {
            issues.push(ValidationIssue {
                kind: IssueKind::DuplicateSku,
                message: format!("Duplicate SKU '{code}' in rows {row_list}"),
                row: Sheet::display_row(*index),
                column: Some(code_column),
            });
        }
    }
    issues.sort_by_key(|issue| issue.row);
    issues
}
