//! Command implementations.

use anyhow::Result;

use sku_cli::pipeline::{CheckResult, check_folder, migrate_from};
use sku_model::{SkuSettings, Specification};

use crate::cli::{CatalogArgs, CheckArgs};

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let settings = SkuSettings::default()
        .with_delimiter(&args.delimiter)
        .with_prefix(&args.prefix)
        .with_suffix(&args.suffix);
    check_folder(&args.folder, args.catalog.as_deref(), &settings)
}

pub fn run_catalog(args: &CatalogArgs) -> Result<Vec<Specification>> {
    migrate_from(&args.file)
}
