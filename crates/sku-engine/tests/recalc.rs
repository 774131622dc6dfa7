//! Tests for the recalculation controller.

use sku_engine::{MemorySheetStore, SheetStore, recalculate_all};
use sku_model::{
    Column, Sheet, SheetId, SheetKind, SheetRow, SkuSettings, SpecId, SpecValue, Specification,
    ValueId,
};

fn spec(id: &str, name: &str, order: u32, values: &[(&str, &str)]) -> Specification {
    let mut spec = Specification::new(SpecId::new(id).expect("spec id"), name, order);
    for (index, (label, fragment)) in values.iter().enumerate() {
        spec.values.push(SpecValue {
            id: ValueId::new(format!("{id}-v{index}")).expect("value id"),
            display_value: (*label).to_string(),
            sku_fragment: (*fragment).to_string(),
        });
    }
    spec
}

fn sample_catalog() -> Vec<Specification> {
    vec![
        spec("color", "Color", 0, &[("Red", "R"), ("Blue", "B")]),
        spec("size", "Size", 1, &[("Small", "S"), ("Large", "L")]),
    ]
}

fn products_sheet(id: &str) -> Sheet {
    let mut sheet = Sheet::new(
        SheetId::new(id).expect("sheet id"),
        id,
        SheetKind::Data,
        vec![
            Column::text("Name"),
            Column::selection("Color", SpecId::new("color").expect("spec id")),
            Column::selection("Size", SpecId::new("size").expect("spec id")),
            Column::sku_code("SKU Code"),
        ],
    );
    sheet.push_row(SheetRow::new(vec![
        "Widget".to_string(),
        "Red".to_string(),
        "Small".to_string(),
        "stale".to_string(),
    ]));
    sheet.push_row(SheetRow::new(vec![
        "Gadget".to_string(),
        "Blue".to_string(),
        String::new(),
        String::new(),
    ]));
    sheet
}

#[test]
fn rewrites_only_the_code_column() {
    let mut store = MemorySheetStore::new(vec![products_sheet("products")]);
    let settings = SkuSettings::default().with_delimiter("-");
    let outcome = recalculate_all(&mut store, &sample_catalog(), &settings);

    assert_eq!(outcome.sheets, 1);
    assert_eq!(outcome.rows, 2);
    let sheet = store
        .sheet(&SheetId::new("products").unwrap())
        .expect("sheet kept");
    assert_eq!(sheet.rows[0].cell(3), "R-S");
    assert_eq!(sheet.rows[1].cell(3), "B");
    // Everything outside the code column is untouched.
    assert_eq!(sheet.rows[0].cell(0), "Widget");
    assert_eq!(sheet.rows[0].cell(1), "Red");
    assert_eq!(sheet.rows[1].cell(2), "");
}

#[test]
fn covers_every_data_sheet_and_skips_config_sheets() {
    let mut config = Sheet::new(
        SheetId::new("catalog").unwrap(),
        "catalog",
        SheetKind::Config,
        vec![Column::text("Specification"), Column::text("Value")],
    );
    config.push_row(SheetRow::new(vec![
        "Color".to_string(),
        "Red".to_string(),
    ]));
    let mut store = MemorySheetStore::new(vec![
        products_sheet("a"),
        products_sheet("b"),
        config.clone(),
    ]);
    let settings = SkuSettings::default().with_delimiter("-");
    let outcome = recalculate_all(&mut store, &sample_catalog(), &settings);

    assert_eq!(outcome.sheets, 2);
    assert_eq!(outcome.rows, 4);
    assert_eq!(
        store.sheet(&SheetId::new("catalog").unwrap()),
        Some(&config)
    );
}

#[test]
fn catalog_mutation_changes_codes_on_the_next_pass() {
    let mut store = MemorySheetStore::new(vec![products_sheet("products")]);
    let settings = SkuSettings::default().with_delimiter("-");
    let mut catalog = sample_catalog();
    recalculate_all(&mut store, &catalog, &settings);

    // Fragment edit invalidates every derived code.
    catalog[0].values[0].sku_fragment = "RD".to_string();
    recalculate_all(&mut store, &catalog, &settings);
    let sheet = store
        .sheet(&SheetId::new("products").unwrap())
        .expect("sheet kept");
    assert_eq!(sheet.rows[0].cell(3), "RD-S");
}

#[test]
fn settings_change_rewraps_codes() {
    let mut store = MemorySheetStore::new(vec![products_sheet("products")]);
    let catalog = sample_catalog();
    recalculate_all(
        &mut store,
        &catalog,
        &SkuSettings::default().with_delimiter("-"),
    );
    let settings = SkuSettings::default()
        .with_delimiter("_")
        .with_prefix("PRD-")
        .with_suffix("-2024");
    recalculate_all(&mut store, &catalog, &settings);
    let sheet = store
        .sheet(&SheetId::new("products").unwrap())
        .expect("sheet kept");
    assert_eq!(sheet.rows[0].cell(3), "PRD-R_S-2024");
    assert_eq!(sheet.rows[1].cell(3), "PRD-B-2024");
}

#[test]
fn empty_sheets_are_skipped() {
    let empty = Sheet::new(
        SheetId::new("empty").unwrap(),
        "empty",
        SheetKind::Data,
        vec![Column::sku_code("SKU Code")],
    );
    let mut store = MemorySheetStore::new(vec![empty]);
    let outcome = recalculate_all(&mut store, &sample_catalog(), &SkuSettings::default());
    assert_eq!(outcome.sheets, 0);
    assert_eq!(outcome.rows, 0);
}

#[test]
fn store_ignores_writes_to_unknown_sheets() {
    let mut store = MemorySheetStore::default();
    store.set_column_values(&SheetId::new("ghost").unwrap(), 0, vec!["X".to_string()]);
    assert!(store.sheets().is_empty());
}
