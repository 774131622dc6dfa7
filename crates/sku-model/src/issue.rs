use serde::{Deserialize, Serialize};

use crate::SheetId;

/// Validation issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A selection cell references a label absent from its specification.
    MissingValue,
    /// Two or more rows produced the identical generated code.
    DuplicateSku,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingValue => "missing value",
            Self::DuplicateSku => "duplicate SKU",
        }
    }
}

/// A validation issue found in one sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable message describing the issue.
    pub message: String,
    /// User-facing row number (1-based, counting the header row).
    pub row: usize,
    /// Offending column index, when the issue points at one cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

/// Validation result for a single sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub sheet: SheetId,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn missing_value_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.kind == IssueKind::MissingValue)
            .count()
    }

    pub fn duplicate_sku_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.kind == IssueKind::DuplicateSku)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
