//! SKU code generation.

use sku_model::{SelectedValues, SkuSettings, Specification};

/// Derives a row's composite SKU code from its selected values.
///
/// Specifications contribute fragments in ascending `order` (ties broken by
/// slice position; the caller's slice is never reordered). A specification
/// with no entry in `selected`, or whose entry matches no current value
/// label, is skipped without a delimiter placeholder — stale references are
/// absorbed here and reported by the validation engine instead. Zero
/// fragments produce the empty string; prefix and suffix never appear alone.
///
/// Pure and total: output depends only on the three snapshots passed in.
pub fn generate(
    selected: &SelectedValues,
    catalog: &[Specification],
    settings: &SkuSettings,
) -> String {
    let mut ordered: Vec<&Specification> = catalog.iter().collect();
    ordered.sort_by_key(|spec| spec.order);

    let mut fragments: Vec<&str> = Vec::new();
    for spec in ordered {
        let Some(label) = selected.get(&spec.id) else {
            continue;
        };
        let Some(value) = spec.value_by_label(label) else {
            continue;
        };
        fragments.push(&value.sku_fragment);
    }

    if fragments.is_empty() {
        return String::new();
    }
    format!(
        "{}{}{}",
        settings.prefix,
        fragments.join(&settings.delimiter),
        settings.suffix
    )
}
