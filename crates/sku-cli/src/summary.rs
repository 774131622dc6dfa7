//! Human-facing summaries rendered with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sku_cli::pipeline::CheckResult;
use sku_model::{Specification, ValidationIssue, ValidationReport};

pub fn print_check_summary(result: &CheckResult) {
    println!(
        "Catalog: {} specifications",
        result.catalog.len()
    );
    println!(
        "Recalculated {} rows across {} sheets",
        result.outcome.rows, result.outcome.sheets
    );

    let mut table = new_table();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Missing values"),
        header_cell("Duplicate SKUs"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in &result.reports {
        table.add_row(vec![
            Cell::new(report.sheet.as_str()),
            count_cell(report.missing_value_count(), Color::Red),
            count_cell(report.duplicate_sku_count(), Color::Yellow),
        ]);
    }
    println!("{table}");

    for report in &result.reports {
        for issue in &report.issues {
            println!("{}: {}", report.sheet, format_issue(issue));
        }
    }
    let (missing, duplicates) = issue_totals(&result.reports);
    if missing + duplicates == 0 {
        println!("No issues found.");
    }
}

pub fn print_catalog(catalog: &[Specification]) {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Specification"),
        header_cell("Value"),
        header_cell("Fragment"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for spec in catalog {
        for value in &spec.values {
            table.add_row(vec![
                Cell::new(spec.order),
                Cell::new(&spec.name),
                Cell::new(&value.display_value),
                Cell::new(&value.sku_fragment),
            ]);
        }
        if spec.values.is_empty() {
            table.add_row(vec![
                Cell::new(spec.order),
                Cell::new(&spec.name),
                Cell::new("-"),
                Cell::new("-"),
            ]);
        }
    }
    println!("{table}");
}

fn format_issue(issue: &ValidationIssue) -> String {
    match issue.column {
        Some(column) => format!(
            "row {}, column {}: {}",
            issue.row, column, issue.message
        ),
        None => format!("row {}: {}", issue.row, issue.message),
    }
}

pub fn issue_totals(reports: &[ValidationReport]) -> (usize, usize) {
    reports.iter().fold((0, 0), |(missing, duplicates), report| {
        (
            missing + report.missing_value_count(),
            duplicates + report.duplicate_sku_count(),
        )
    })
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sku_model::IssueKind;

    #[test]
    fn issue_line_includes_position() {
        let issue = ValidationIssue {
            kind: IssueKind::MissingValue,
            message: "Value 'Green' not found in specification 'Color'".to_string(),
            row: 2,
            column: Some(1),
        };
        assert_eq!(
            format_issue(&issue),
            "row 2, column 1: Value 'Green' not found in specification 'Color'"
        );
    }

    #[test]
    fn totals_sum_over_reports() {
        use sku_model::SheetId;
        let reports = vec![ValidationReport {
            sheet: SheetId::new("products").unwrap(),
            issues: vec![ValidationIssue {
                kind: IssueKind::DuplicateSku,
                message: "Duplicate SKU 'R' in rows 2, 3".to_string(),
                row: 2,
                column: Some(3),
            }],
        }];
        assert_eq!(issue_totals(&reports), (0, 1));
    }
}
