pub mod csv_ingest;
pub mod error;
pub mod migrate;
pub mod tabular;

pub use csv_ingest::{load_sheet, load_source_table};
pub use error::{IngestError, Result};
pub use migrate::{SOURCE_HEADER, migrate_catalog};
pub use tabular::{SourceCell, SourceTable};
