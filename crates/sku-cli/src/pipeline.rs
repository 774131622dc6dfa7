//! Check pipeline: migrate the catalog, recalculate every data sheet,
//! validate, and hand the results to the summary printer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use sku_engine::{MemorySheetStore, RecalcOutcome, recalculate_all};
use sku_ingest::{load_sheet, load_source_table, migrate_catalog};
use sku_model::{SequentialIds, SheetId, SkuSettings, Specification, ValidationReport};
use sku_validate::validate_sheets;

/// Result of a check run.
pub struct CheckResult {
    pub catalog: Vec<Specification>,
    pub outcome: RecalcOutcome,
    pub reports: Vec<ValidationReport>,
}

impl CheckResult {
    pub fn has_issues(&self) -> bool {
        self.reports.iter().any(|report| !report.is_clean())
    }
}

/// Runs the full check pass over a folder of CSV files.
///
/// `catalog_path` defaults to `<folder>/catalog.csv`; every other `*.csv`
/// in the folder is loaded as a data sheet, in name order.
pub fn check_folder(
    folder: &Path,
    catalog_path: Option<&Path>,
    settings: &SkuSettings,
) -> Result<CheckResult> {
    let default_catalog = folder.join("catalog.csv");
    let catalog_path = catalog_path.unwrap_or(&default_catalog);
    let catalog = migrate_from(catalog_path)?;
    info!(
        specifications = catalog.len(),
        "migrated specification catalog"
    );

    let mut store = MemorySheetStore::default();
    for path in sheet_paths(folder, catalog_path)? {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let id = SheetId::new(&stem)
            .with_context(|| format!("invalid sheet name derived from {}", path.display()))?;
        let sheet = load_sheet(&path, id, &catalog)
            .with_context(|| format!("failed to load sheet {}", path.display()))?;
        debug!(sheet = %stem, rows = sheet.rows.len(), "loaded data sheet");
        store.insert(sheet);
    }

    let outcome = recalculate_all(&mut store, &catalog, settings);
    let reports = validate_sheets(store.sheets(), &catalog);
    Ok(CheckResult {
        catalog,
        outcome,
        reports,
    })
}

/// Loads and migrates a catalog table, failing when it has no data rows.
pub fn migrate_from(path: &Path) -> Result<Vec<Specification>> {
    let table = load_source_table(path)
        .with_context(|| format!("failed to load catalog table {}", path.display()))?;
    let mut ids = SequentialIds::new("catalog");
    match migrate_catalog(&table, &mut ids) {
        Some(catalog) => Ok(catalog),
        None => bail!("catalog table {} has no data rows", path.display()),
    }
}

/// Every `*.csv` in the folder except the catalog table, sorted by name.
fn sheet_paths(folder: &Path, catalog_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("failed to read folder {}", folder.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read folder {}", folder.display()))?
            .path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.as_path() != catalog_path {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
