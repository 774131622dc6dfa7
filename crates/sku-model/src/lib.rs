pub mod catalog;
pub mod error;
pub mod ids;
pub mod issue;
pub mod selection;
pub mod settings;
pub mod sheet;

pub use catalog::{
    SpecValue, Specification, add_specification, remove_specification, reorder_specification,
    rename_specification, spec_by_id, spec_by_id_mut,
};
pub use error::{ModelError, Result};
pub use ids::{IdGenerator, SequentialIds, SheetId, SpecId, ValueId};
pub use issue::{IssueKind, ValidationIssue, ValidationReport};
pub use selection::SelectedValues;
pub use settings::SkuSettings;
pub use sheet::{Column, ColumnKind, Sheet, SheetKind, SheetRow};
