//! Fixture tests for SKU code generation.

use sku_engine::generate;
use sku_model::{SelectedValues, SkuSettings, SpecId, SpecValue, Specification, ValueId};

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
        spec("temp", "Temperature", 0, &[("29deg C", "29C"), ("34deg C", "34C")]),
        spec("color", "Color", 1, &[("Red", "R"), ("Blue", "B")]),
        spec("type", "Type", 2, &[("Standard", "STD"), ("Premium", "PRM")]),
    ]
}

fn selection(pairs: &[(&str, &str)]) -> SelectedValues {
    pairs
        .iter()
        .map(|(id, label)| (SpecId::new(*id).expect("spec id"), (*label).to_string()))
        .collect()
}

#[test]
fn joins_fragments_in_specification_order() {
    let selected = selection(&[("temp", "29deg C"), ("color", "Red")]);
    let settings = SkuSettings::default().with_delimiter("-");
    assert_eq!(generate(&selected, &sample_catalog(), &settings), "29C-R");
}

#[test]
fn adding_a_selection_extends_the_code() {
    let selected = selection(&[("temp", "29deg C"), ("color", "Red"), ("type", "Standard")]);
    let settings = SkuSettings::default().with_delimiter("-");
    assert_eq!(generate(&selected, &sample_catalog(), &settings), "29C-R-STD");
}

#[test]
fn wraps_with_prefix_and_suffix() {
    let selected = selection(&[("temp", "29deg C"), ("color", "Red"), ("type", "Standard")]);
    let settings = SkuSettings::default()
        .with_delimiter("_")
        .with_prefix("PRD-")
        .with_suffix("-2024");
    assert_eq!(
        generate(&selected, &sample_catalog(), &settings),
        "PRD-29C_R_STD-2024"
    );
}

#[test]
fn unknown_label_is_skipped_without_placeholder() {
    let selected = selection(&[("temp", "29deg C"), ("color", "Green"), ("type", "Standard")]);
    let settings = SkuSettings::default().with_delimiter("-");
    assert_eq!(generate(&selected, &sample_catalog(), &settings), "29C-STD");
}

#[test]
fn unknown_spec_id_is_skipped() {
    let selected = selection(&[("temp", "29deg C"), ("material", "Steel")]);
    let settings = SkuSettings::default().with_delimiter("-");
    assert_eq!(generate(&selected, &sample_catalog(), &settings), "29C");
}

#[test]
fn empty_selection_or_catalog_yields_empty_code() {
    let settings = SkuSettings::default()
        .with_delimiter("-")
        .with_prefix("PRD-")
        .with_suffix("-2024");
    assert_eq!(generate(&SelectedValues::new(), &sample_catalog(), &settings), "");
    let selected = selection(&[("temp", "29deg C")]);
    assert_eq!(generate(&selected, &[], &settings), "");
}

#[test]
fn prefix_and_suffix_never_appear_alone() {
    let selected = selection(&[("color", "Green")]);
    let settings = SkuSettings::default()
        .with_prefix("PRD-")
        .with_suffix("-2024");
    assert_eq!(generate(&selected, &sample_catalog(), &settings), "");
}

#[test]
fn empty_delimiter_concatenates() {
    let selected = selection(&[("temp", "29deg C"), ("color", "Red")]);
    assert_eq!(
        generate(&selected, &sample_catalog(), &SkuSettings::default()),
        "29CR"
    );
}

#[test]
fn catalog_slice_order_does_not_matter() {
    let selected = selection(&[("temp", "29deg C"), ("color", "Red"), ("type", "Standard")]);
    let settings = SkuSettings::default().with_delimiter("-");
    let mut reversed = sample_catalog();
    reversed.reverse();
    assert_eq!(generate(&selected, &reversed, &settings), "29C-R-STD");
}

#[test]
fn caller_catalog_is_not_mutated() {
    let selected = selection(&[("color", "Red")]);
    let mut shuffled = sample_catalog();
    shuffled.swap(0, 2);
    let before = shuffled.clone();
    generate(&selected, &shuffled, &SkuSettings::default());
    assert_eq!(shuffled, before);
}

#[test]
fn migrated_catalog_reproduces_source_codes() {
    use sku_ingest::{SourceTable, migrate_catalog};
    use sku_model::SequentialIds;

    let source = SourceTable::from_strings(vec![
        vec![
            "Specification".to_string(),
            "Value".to_string(),
            "SKU Code".to_string(),
        ],
        vec!["Type".to_string(), "Standard".to_string(), "STD".to_string()],
        vec!["Type".to_string(), "Premium".to_string(), "PRM".to_string()],
        vec!["Color".to_string(), "Red".to_string(), "R".to_string()],
    ]);
    let mut ids = SequentialIds::new("rt");
    let catalog = migrate_catalog(&source, &mut ids).expect("catalog");

    // One value selected per migrated specification regenerates the code
    // column of the source rows.
    let type_id = catalog[0].id.clone();
    let color_id = catalog[1].id.clone();
    let mut selected = SelectedValues::new();
    selected.insert(type_id, "Premium".to_string());
    assert_eq!(generate(&selected, &catalog, &SkuSettings::default()), "PRM");

    selected.insert(color_id, "Red".to_string());
    let settings = SkuSettings::default().with_delimiter("-");
    assert_eq!(generate(&selected, &catalog, &settings), "PRM-R");
}
